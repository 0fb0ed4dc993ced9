// src/config/consts.rs

// Site markup contract.
// Class names are specific to shopee.co.id's current order page and can
// change without notice; everything that addresses the page goes through
// these constants.
pub const SHOP_CLASS: &str = "UDaMW3";
pub const ITEM_CLASS: &str = "DWVWOJ";
pub const PRICE_CLASS: &str = "ylYzwa";

// Inside a price block.
pub const PRICE_CONTAINER_CLASS: &str = "YRp1mm";
pub const DISCOUNT_CLASSES: [&str; 2] = ["nW_6Oi", "PNlXhK"];
pub const ORIGINAL_CLASS: &str = "q6Gzj5";

// Price blocks are expected to immediately follow their item in the
// element stream; scanning further risks attaching the wrong item's price.
pub const PRICE_LOOKAHEAD: usize = 9;

// Local store
pub const STORE_DIR: &str = ".store";
pub const HISTORY_FILE: &str = "history.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = ".store/debug.log";

// History list is capped; oldest entries are evicted first.
pub const HISTORY_CAP: usize = 20;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_STEM: &str = "shopee_orders";
