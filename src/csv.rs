// src/csv.rs
use std::io::{self, Write};

use crate::data::ResultSet;

/* ---------------- Writing ---------------- */

// Semicolon-delimited, per the downstream spreadsheet conventions the tool
// feeds; text-bearing fields are always quoted, the row number never is.
pub const DELIM: char = ';';

// Byte-order marker so spreadsheet apps pick up UTF-8.
pub const BOM: &str = "\u{feff}";

pub const HEADER: [&str; 4] = ["No", "Shop Name", "Item Name", "Total Order"];

/// Quote a field, doubling any embedded quotes.
fn quoted(field: &str) -> String {
    join!("\"", &field.replace('"', "\"\""), "\"")
}

/// Write the header line (bare fields).
pub fn write_header<W: Write>(mut w: W) -> io::Result<()> {
    let mut first = true;
    for cell in HEADER {
        if !first { write!(w, "{}", DELIM)?; } else { first = false; }
        write!(w, "{}", cell)?;
    }
    writeln!(w)
}

/// Write one record row: bare row number, quoted shop/item/total.
pub fn write_record<W: Write>(
    mut w: W,
    no: usize,
    shop: &str,
    item: &str,
    total: u64,
) -> io::Result<()> {
    writeln!(
        w,
        "{}{d}{}{d}{}{d}{}",
        no,
        quoted(shop),
        quoted(item),
        quoted(&total.to_string()),
        d = DELIM,
    )
}

/// Placeholder final row: empty quoted fields, grand total last.
pub fn write_total_row<W: Write>(mut w: W, grand_total: u64) -> io::Result<()> {
    writeln!(
        w,
        "{e}{d}{e}{d}{e}{d}{}",
        quoted(&grand_total.to_string()),
        d = DELIM,
        e = quoted(""),
    )
}

/// Full CSV document for the current results: BOM, header, one row per
/// record in scan order, then the grand-total row.
pub fn to_csv_string(results: &ResultSet) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write!(buf, "{}", BOM);
    let _ = write_header(&mut buf);
    for (i, r) in results.records().iter().enumerate() {
        let _ = write_record(&mut buf, i + 1, &r.shop_name, &r.item_name, r.total_order);
    }
    let _ = write_total_row(&mut buf, results.grand_total());

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
