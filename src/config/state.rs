// src/config/state.rs
use super::options::AppOptions;
use crate::data::SortKey;
use crate::store::Settings;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active sort column, if any; `sort_desc` flips on re-click.
    pub sort_key: Option<SortKey>,
    pub sort_desc: bool,

    /// Live filter text matched against shop OR item name.
    pub filter: String,

    /// Results panel (table + raw output) shown?
    pub results_visible: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            sort_key: None,
            sort_desc: false,
            filter: s!(),
            results_visible: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub settings: Settings,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            settings: Settings::default(),
            gui: GuiState::default(),
        }
    }
}

impl AppState {
    /// Mirror persisted settings → scan options (the only ambient-to-explicit
    /// bridge; scans only ever see `ScanOptions`).
    pub fn sync_settings_into_scan(&mut self) {
        self.options.scan.use_discount = self.settings.use_discount;
    }
}
