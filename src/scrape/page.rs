// src/scrape/page.rs
//
// Tagged-node view of an order page. The adapter walks the rendered
// document in depth-first source order; that order encodes the page's
// visual top-to-bottom layout and the extractor depends on it.

use std::error::Error;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::*;

/// One marker element, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageNode {
    /// Shop-name marker; becomes the current shop for subsequent items.
    Shop(String),
    /// Item-name marker.
    Item(String),
    /// Price block with the candidate texts captured at scan time.
    Price(PriceTag),
}

/// Price texts found inside one price block. Which one wins is the
/// extractor's call, not the scanner's.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceTag {
    pub discounted: Option<String>,
    pub original: Option<String>,
    /// First generic `span` anywhere inside the block.
    pub fallback: Option<String>,
}

struct Markers {
    any: Selector,
    container: Selector,
    discount: Selector,
    original: Selector,
    span: Selector,
}

fn selector(css: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(css).map_err(|e| format!("Bad marker selector `{css}`: {e}").into())
}

impl Markers {
    fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            any: selector(&format!(".{SHOP_CLASS}, .{ITEM_CLASS}, .{PRICE_CLASS}"))?,
            container: selector(&format!(".{PRICE_CONTAINER_CLASS}"))?,
            discount: selector(&format!(
                ".{}, .{}",
                DISCOUNT_CLASSES[0], DISCOUNT_CLASSES[1]
            ))?,
            original: selector(&format!(".{ORIGINAL_CLASS}"))?,
            span: selector("span")?,
        })
    }
}

/// Collect all marker elements of the document into tagged nodes,
/// preserving document order.
pub fn collect_nodes(html: &str) -> Result<Vec<PageNode>, Box<dyn Error>> {
    let markers = Markers::new()?;
    let doc = Html::parse_document(html);

    let mut nodes = Vec::new();
    for el in doc.select(&markers.any) {
        if has_class(&el, SHOP_CLASS) {
            nodes.push(PageNode::Shop(text_of(&el)));
        } else if has_class(&el, ITEM_CLASS) {
            nodes.push(PageNode::Item(text_of(&el)));
        } else {
            nodes.push(PageNode::Price(price_tag(&el, &markers)));
        }
    }
    Ok(nodes)
}

fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Concatenated text content, whitespace collapsed and trimmed.
fn text_of(el: &ElementRef) -> String {
    let mut out = s!();
    let mut prev_space = true;
    for chunk in el.text() {
        for ch in chunk.chars() {
            if ch.is_whitespace() {
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
            } else {
                out.push(ch);
                prev_space = false;
            }
        }
    }
    out.trim_end().to_string()
}

fn price_tag(el: &ElementRef, m: &Markers) -> PriceTag {
    let container = el.select(&m.container).next();
    PriceTag {
        discounted: container
            .and_then(|c| c.select(&m.discount).next())
            .map(|e| text_of(&e)),
        original: container
            .and_then(|c| c.select(&m.original).next())
            .map(|e| text_of(&e)),
        fallback: el.select(&m.span).next().map(|e| text_of(&e)),
    }
}
