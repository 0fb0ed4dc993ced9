// tests/aggregate.rs
//
// Sum, sort and filter behavior of the result set and its index view.
//
use shopee_scrape::data::{format_rp, OrderRecord, ResultSet, SortKey};

fn rec(shop: &str, item: &str, total: u64) -> OrderRecord {
    OrderRecord {
        shop_name: shop.into(),
        item_name: item.into(),
        total_order: total,
    }
}

fn sample() -> ResultSet {
    ResultSet::from_records(vec![
        rec("beta shop", "Zebra print", 300),
        rec("Alpha Shop", "apple case", 100),
        rec("beta shop", "Anchor charm", 300),
        rec("Gamma", "banana stand", 200),
    ])
}

#[test]
fn grand_total_is_order_independent() {
    let rs = sample();
    let total = rs.grand_total();
    assert_eq!(total, 900);

    // Any sort or filter applied to the view leaves the aggregate alone.
    for key in [SortKey::Scan, SortKey::Shop, SortKey::Item, SortKey::Price] {
        let _ix = rs.view_indices("", Some(key), true);
        assert_eq!(rs.grand_total(), total);
    }
    let _ix = rs.view_indices("beta", None, false);
    assert_eq!(rs.grand_total(), total);
}

#[test]
fn sort_by_shop_is_case_insensitive_and_stable() {
    let rs = sample();
    let ix = rs.view_indices("", Some(SortKey::Shop), false);
    // Alpha Shop, then the two beta-shop rows in scan order, then Gamma.
    assert_eq!(ix, vec![1, 0, 2, 3]);
}

#[test]
fn sort_direction_reverses() {
    let rs = sample();
    let asc = rs.view_indices("", Some(SortKey::Price), false);
    let desc = rs.view_indices("", Some(SortKey::Price), true);
    assert_eq!(asc, vec![1, 3, 0, 2]);
    // Equal prices keep scan order in both directions (stable comparator).
    assert_eq!(desc, vec![0, 2, 3, 1]);
}

#[test]
fn scan_key_restores_original_order() {
    let rs = sample();
    let ix = rs.view_indices("", Some(SortKey::Scan), false);
    assert_eq!(ix, vec![0, 1, 2, 3]);
}

#[test]
fn filter_matches_shop_or_item_case_insensitively() {
    let rs = sample();

    let by_shop = rs.view_indices("BETA", None, false);
    assert_eq!(by_shop, vec![0, 2]);

    let by_item = rs.view_indices("banana", None, false);
    assert_eq!(by_item, vec![3]);

    let none = rs.view_indices("does-not-exist", None, false);
    assert!(none.is_empty());
}

#[test]
fn filter_is_reevaluated_against_live_results() {
    let mut rs = sample();
    assert_eq!(rs.view_indices("beta", None, false).len(), 2);

    // Replacing the set wholesale changes what the same filter matches.
    rs = ResultSet::from_records(vec![rec("beta shop", "only one", 50)]);
    assert_eq!(rs.view_indices("beta", None, false).len(), 1);

    rs.clear();
    assert!(rs.view_indices("beta", None, false).is_empty());
}

#[test]
fn filter_and_sort_compose() {
    let rs = sample();
    let ix = rs.view_indices("beta", Some(SortKey::Item), false);
    // Anchor charm before Zebra print.
    assert_eq!(ix, vec![2, 0]);
}

#[test]
fn rupiah_formatting() {
    assert_eq!(format_rp(0), "Rp0");
    assert_eq!(format_rp(999), "Rp999");
    assert_eq!(format_rp(15_000), "Rp15.000");
    assert_eq!(format_rp(1_234_567), "Rp1.234.567");
}
