// src/markdown.rs
use crate::data::{format_rp, ResultSet};

/// Escape literal pipes so a cell cannot break the table.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

/// GitHub-flavored pipe table of the current results plus the grand total.
pub fn to_markdown_string(results: &ResultSet) -> String {
    let mut md = s!("# Order Summary\n");
    md.push_str("| No | Shop Name | Item Name | Total Order |\n");
    md.push_str("|----|-----------|-----------|-------------|\n");
    for (i, r) in results.records().iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            i + 1,
            escape_cell(&r.shop_name),
            escape_cell(&r.item_name),
            format_rp(r.total_order),
        ));
    }
    md.push_str(&format!(
        "\n## Grand Total: {}\n",
        format_rp(results.grand_total())
    ));
    md
}

/// The plain shop/item/price triples shown in the raw-output panel.
pub fn to_raw_string(results: &ResultSet) -> String {
    let mut out = s!();
    for r in results.records() {
        out.push_str(&r.shop_name);
        out.push('\n');
        out.push_str(&r.item_name);
        out.push('\n');
        out.push_str(&format_rp(r.total_order));
        out.push('\n');
    }
    out.trim_end().to_string()
}
