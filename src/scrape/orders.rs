// src/scrape/orders.rs
use std::error::Error;

use crate::config::options::ScanOptions;
use crate::data::{OrderRecord, ResultSet};
use crate::progress::Progress;

use super::page::{collect_nodes, PageNode, PriceTag};

/// Reconstruct order records from tagged nodes in scan order.
/// Pure: no document access, no ambient configuration.
///
/// A shop marker becomes the current shop for every item after it until the
/// next shop marker; an item seen before any shop is dropped.
pub fn extract_orders(nodes: &[PageNode], opts: &ScanOptions) -> Vec<OrderRecord> {
    let mut records = Vec::new();
    let mut shop: Option<&str> = None;

    for (i, node) in nodes.iter().enumerate() {
        match node {
            PageNode::Shop(name) => shop = Some(name),
            PageNode::Item(item) => {
                let Some(shop_name) = shop else { continue };
                let total = find_price(nodes, i, opts.lookahead)
                    .map(|tag| resolve_total(tag, opts.use_discount))
                    .unwrap_or(0);
                records.push(OrderRecord {
                    shop_name: s!(shop_name),
                    item_name: item.clone(),
                    total_order: total,
                });
            }
            PageNode::Price(_) => {}
        }
    }

    records
}

/// Nearest price block within the next `lookahead` nodes after the item.
fn find_price(nodes: &[PageNode], item_ix: usize, lookahead: usize) -> Option<&PriceTag> {
    nodes
        .iter()
        .skip(item_ix + 1)
        .take(lookahead)
        .find_map(|n| match n {
            PageNode::Price(tag) => Some(tag),
            _ => None,
        })
}

/// Discounted wins when enabled and present; otherwise the original-price
/// element; otherwise whatever generic span the block carried.
fn resolve_total(tag: &PriceTag, use_discount: bool) -> u64 {
    let text = if use_discount && tag.discounted.is_some() {
        tag.discounted.as_deref()
    } else if tag.original.is_some() {
        tag.original.as_deref()
    } else {
        tag.fallback.as_deref()
    };
    text.map(parse_digits).unwrap_or(0)
}

/// Strip everything but ASCII digits and parse base-10; no digits → 0.
fn parse_digits(s: &str) -> u64 {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() { 0 } else { digits.parse().unwrap_or(0) }
}

/// Parse a saved order page into a fresh result set.
///
/// No markers is not an error: the result is empty and the caller surfaces
/// the "nothing found" notice. A real failure propagates and the caller
/// keeps its previous results untouched.
pub fn collect_orders(
    html: &str,
    opts: &ScanOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ResultSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Scanning page…");
    }

    let nodes = collect_nodes(html)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(nodes.len());
    }

    let records = extract_orders(&nodes, opts);

    if let Some(p) = progress.as_deref_mut() {
        for (i, r) in records.iter().enumerate() {
            p.item_done(i, &r.shop_name);
        }
        p.finish();
    }

    Ok(ResultSet::from_records(records))
}
