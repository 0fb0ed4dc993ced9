// src/data.rs
//
// Canonical parse output and the derived view the frontends render.
//
// - OrderRecord / ResultSet: canonical scan-ordered records for the current
//   session. Replaced wholesale by a parse or a history load; cleared on
//   "clean". Nothing else mutates them.
// - view_indices: derived (view) ordering/visibility produced by applying
//   the current sort + filter. Holds positions into the ResultSet, so the
//   view is always re-evaluated against live data and scan order stays
//   recoverable.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One parsed order line. Field names serialize in the page's own casing so
/// history snapshots read like the site data they came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "shopName")]
    pub shop_name: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "totalOrder")]
    pub total_order: u64,
}

/// Scan-ordered record list for the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<OrderRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Original scan order (document order of the item markers).
    Scan,
    Shop,
    Item,
    Price,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Integer sum of all record totals. Recomputed on demand, never cached.
    pub fn grand_total(&self) -> u64 {
        self.records.iter().map(|r| r.total_order).sum()
    }

    /// Positions of the records to display, filtered then stably sorted.
    ///
    /// - `filter`: case-insensitive substring matched against shop OR item
    ///   name; empty keeps everything.
    /// - `sort`: `None` keeps scan order. Direction is applied by reversing
    ///   the comparator, which leaves equal keys in scan order either way.
    pub fn view_indices(&self, filter: &str, sort: Option<SortKey>, descending: bool) -> Vec<usize> {
        let needle = filter.trim().to_lowercase();
        let mut ix: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| needle.is_empty() || r.matches(&needle))
            .map(|(i, _)| i)
            .collect();

        if let Some(key) = sort {
            ix.sort_by(|&a, &b| {
                let (ra, rb) = (&self.records[a], &self.records[b]);
                let ord = match key {
                    SortKey::Scan => a.cmp(&b),
                    SortKey::Shop => cmp_text(&ra.shop_name, &rb.shop_name),
                    SortKey::Item => cmp_text(&ra.item_name, &rb.item_name),
                    SortKey::Price => ra.total_order.cmp(&rb.total_order),
                };
                if descending { ord.reverse() } else { ord }
            });
        }

        ix
    }
}

impl OrderRecord {
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.shop_name.to_lowercase().contains(needle)
            || self.item_name.to_lowercase().contains(needle)
    }
}

/// Case-insensitive text ordering with a raw tiebreak so the result is total.
fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// `Rp` amount with `.` thousands grouping, e.g. `Rp1.234.500`.
pub fn format_rp(n: u64) -> String {
    let digits = n.to_string();
    let mut out = s!("Rp");
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Display value for one record total: 0 means the price was never resolved.
pub fn display_total(total: u64) -> String {
    if total > 0 { format_rp(total) } else { s!("Price not found") }
}
