// tests/extract.rs
//
// Extractor semantics over tagged nodes, plus the HTML adapter.
//
use shopee_scrape::config::options::ScanOptions;
use shopee_scrape::progress::NullProgress;
use shopee_scrape::scrape::page::{collect_nodes, PageNode, PriceTag};
use shopee_scrape::scrape::{collect_orders, extract_orders};

fn shop(name: &str) -> PageNode {
    PageNode::Shop(name.into())
}

fn item(name: &str) -> PageNode {
    PageNode::Item(name.into())
}

fn price(text: &str) -> PageNode {
    PageNode::Price(PriceTag {
        discounted: None,
        original: Some(text.into()),
        fallback: None,
    })
}

#[test]
fn interleaved_item_price_sequence() {
    // [shop:"A", item:"X", price:"10000", item:"Y", price:"20000"]
    let nodes = vec![
        shop("A"),
        item("X"),
        price("10000"),
        item("Y"),
        price("20000"),
    ];
    let records = extract_orders(&nodes, &ScanOptions::default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].shop_name, "A");
    assert_eq!(records[0].item_name, "X");
    assert_eq!(records[0].total_order, 10_000);
    assert_eq!(records[1].shop_name, "A");
    assert_eq!(records[1].item_name, "Y");
    assert_eq!(records[1].total_order, 20_000);
}

#[test]
fn shop_attribution_spans_items_until_next_shop() {
    let nodes = vec![
        shop("Toko A"),
        item("one"),
        price("100"),
        item("two"),
        price("200"),
        shop("Toko B"),
        item("three"),
        price("300"),
    ];
    let records = extract_orders(&nodes, &ScanOptions::default());

    let shops: Vec<&str> = records.iter().map(|r| r.shop_name.as_str()).collect();
    assert_eq!(shops, ["Toko A", "Toko A", "Toko B"]);
}

#[test]
fn item_before_any_shop_is_dropped() {
    let nodes = vec![item("orphan"), price("500"), shop("A"), item("kept"), price("900")];
    let records = extract_orders(&nodes, &ScanOptions::default());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].item_name, "kept");
}

#[test]
fn price_lookahead_is_bounded() {
    // Item at index 1; 8 pad nodes; price lands exactly 9 nodes after.
    let mut nodes = vec![shop("A"), item("near")];
    for _ in 0..8 {
        nodes.push(shop("pad"));
    }
    nodes.push(price("7000"));
    let records = extract_orders(&nodes, &ScanOptions::default());
    assert_eq!(records[0].total_order, 7000);

    // One more pad pushes the price to 10 nodes out: unresolved, total 0.
    let mut nodes = vec![shop("A"), item("far")];
    for _ in 0..9 {
        nodes.push(shop("pad"));
    }
    nodes.push(price("7000"));
    let records = extract_orders(&nodes, &ScanOptions::default());
    assert_eq!(records[0].total_order, 0);
}

#[test]
fn lookahead_is_configurable() {
    let nodes = vec![shop("A"), item("x"), shop("pad"), shop("pad"), price("1234")];
    let mut opts = ScanOptions::default();

    opts.lookahead = 2;
    assert_eq!(extract_orders(&nodes, &opts)[0].total_order, 0);

    opts.lookahead = 3;
    assert_eq!(extract_orders(&nodes, &opts)[0].total_order, 1234);
}

#[test]
fn discount_preference() {
    let tag = PriceTag {
        discounted: Some("Rp8.000".into()),
        original: Some("Rp10.000".into()),
        fallback: Some("Rp9.999".into()),
    };
    let nodes = vec![shop("A"), item("x"), PageNode::Price(tag)];

    let mut opts = ScanOptions::default();
    opts.use_discount = true;
    assert_eq!(extract_orders(&nodes, &opts)[0].total_order, 8000);

    opts.use_discount = false;
    assert_eq!(extract_orders(&nodes, &opts)[0].total_order, 10_000);
}

#[test]
fn price_fallback_chain() {
    // No discount element: original wins even with use_discount on.
    let original_only = PriceTag {
        discounted: None,
        original: Some("Rp5.000".into()),
        fallback: Some("Rp1".into()),
    };
    let nodes = vec![shop("A"), item("x"), PageNode::Price(original_only)];
    assert_eq!(extract_orders(&nodes, &ScanOptions::default())[0].total_order, 5000);

    // Neither marked sub-element: first generic span wins.
    let fallback_only = PriceTag {
        discounted: None,
        original: None,
        fallback: Some("Rp3.500".into()),
    };
    let nodes = vec![shop("A"), item("x"), PageNode::Price(fallback_only)];
    assert_eq!(extract_orders(&nodes, &ScanOptions::default())[0].total_order, 3500);

    // Nothing parsable at all: 0, not an error.
    let empty = PriceTag::default();
    let nodes = vec![shop("A"), item("x"), PageNode::Price(empty)];
    assert_eq!(extract_orders(&nodes, &ScanOptions::default())[0].total_order, 0);
}

#[test]
fn digit_stripping() {
    let cases = [
        ("Rp1.234.567", 1_234_567),
        ("  Rp 10.000 ", 10_000),
        ("free!", 0),
        ("", 0),
    ];
    for (text, expected) in cases {
        let nodes = vec![shop("A"), item("x"), price(text)];
        let records = extract_orders(&nodes, &ScanOptions::default());
        assert_eq!(records[0].total_order, expected, "input {text:?}");
    }
}

/* ---------- HTML adapter ---------- */

const PAGE: &str = r#"
<html><body>
  <div class="UDaMW3">Toko Sumber Rejeki</div>
  <div class="DWVWOJ">Kaos Polos Hitam</div>
  <div class="ylYzwa">
    <div class="YRp1mm">
      <span class="q6Gzj5">Rp50.000</span>
      <span class="nW_6Oi">Rp35.000</span>
    </div>
  </div>
  <div class="DWVWOJ">Topi Baseball</div>
  <div class="ylYzwa">
    <div class="YRp1mm">
      <span class="q6Gzj5">Rp25.000</span>
    </div>
  </div>
  <div class="UDaMW3">Toko Kedua</div>
  <div class="DWVWOJ">Sepatu Lari</div>
  <div class="ylYzwa"><span>Rp150.000</span></div>
</body></html>
"#;

#[test]
fn adapter_collects_markers_in_document_order() {
    let nodes = collect_nodes(PAGE).unwrap();
    assert_eq!(nodes.len(), 8);
    assert!(matches!(&nodes[0], PageNode::Shop(s) if s == "Toko Sumber Rejeki"));
    assert!(matches!(&nodes[1], PageNode::Item(s) if s == "Kaos Polos Hitam"));
    assert!(matches!(&nodes[2], PageNode::Price(_)));

    // Discount and original both captured from the first price block.
    let PageNode::Price(tag) = &nodes[2] else { panic!("expected price node") };
    assert_eq!(tag.discounted.as_deref(), Some("Rp35.000"));
    assert_eq!(tag.original.as_deref(), Some("Rp50.000"));
}

#[test]
fn adapter_end_to_end() {
    let mut progress = NullProgress;
    let results = collect_orders(PAGE, &ScanOptions::default(), Some(&mut progress)).unwrap();
    let records = results.records();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].shop_name, "Toko Sumber Rejeki");
    assert_eq!(records[0].total_order, 35_000); // discounted beats original
    assert_eq!(records[1].total_order, 25_000); // original only
    assert_eq!(records[2].shop_name, "Toko Kedua");
    assert_eq!(records[2].total_order, 150_000); // bare span fallback
    assert_eq!(results.grand_total(), 210_000);
}

#[test]
fn no_markers_yields_empty_not_error() {
    let results = collect_orders("<html><body><p>hi</p></body></html>", &ScanOptions::default(), None)
        .unwrap();
    assert!(results.is_empty());
}
