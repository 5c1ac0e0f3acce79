use super::*;
use crate::db::models::{Dietary, MenuItem};
use crate::db::repository::make_record_id;

fn item(key: &str, name: &str, price: f64) -> MenuItem {
    MenuItem {
        id: Some(make_record_id("menu_item", key)),
        caterer: make_record_id("caterer", "test"),
        name: name.to_string(),
        description: None,
        price,
        category: None,
        dietary: Dietary::Veg,
        image: String::new(),
        is_available: true,
        is_popular: false,
        sort_order: 0,
        is_active: true,
    }
}

fn pick(item_id: &str, quantity: u32) -> QuoteItemInput {
    QuoteItemInput {
        item_id: item_id.to_string(),
        quantity,
    }
}

fn tier(min_guests: u32, discount_percent: f64) -> DiscountTier {
    DiscountTier {
        min_guests,
        discount_percent,
    }
}

#[test]
fn test_subtotal_scales_with_guests() {
    let catalog = vec![item("dal", "Dal Makhani", 100.0), item("naan", "Naan", 20.0)];
    let quote = build_quote(
        &catalog,
        &[],
        0.0,
        &[pick("dal", 2), pick("naan", 4)],
        10,
    )
    .expect("quote should succeed");

    // (100 * 2 + 20 * 4) * 10 guests
    assert_eq!(quote.subtotal, 2800.0);
    assert_eq!(quote.per_plate_cost, 280.0);
    assert_eq!(quote.items.len(), 2);
}

#[test]
fn test_no_tiers_total_is_subtotal_plus_misc() {
    let catalog = vec![item("dal", "Dal Makhani", 100.0)];
    for guests in [1, 7, 50, 500] {
        let quote = build_quote(&catalog, &[], 150.0, &[pick("dal", 1)], guests)
            .expect("quote should succeed");
        assert_eq!(quote.discount_percent, 0.0);
        assert_eq!(quote.discount_amount, 0.0);
        assert_eq!(quote.total_cost, quote.subtotal + 150.0);
    }
}

#[test]
fn test_tier_selection_largest_qualifying_min_wins() {
    let tiers = vec![tier(10, 5.0), tier(50, 10.0)];

    assert_eq!(select_discount_percent(&tiers, 60), 10.0);
    assert_eq!(select_discount_percent(&tiers, 50), 10.0);
    assert_eq!(select_discount_percent(&tiers, 49), 5.0);
    assert_eq!(select_discount_percent(&tiers, 10), 5.0);
    assert_eq!(select_discount_percent(&tiers, 9), 0.0);
}

#[test]
fn test_discount_applies_to_subtotal_plus_misc() {
    let catalog = vec![item("dal", "Dal Makhani", 10.0)];
    // subtotal = 10 * 1 * 100 = 1000, misc = 200, 10% off 1200
    let quote = build_quote(
        &catalog,
        &[tier(50, 10.0)],
        200.0,
        &[pick("dal", 1)],
        100,
    )
    .expect("quote should succeed");

    assert_eq!(quote.subtotal, 1000.0);
    assert_eq!(quote.discount_percent, 10.0);
    assert_eq!(quote.discount_amount, 120.0);
    assert_eq!(quote.total_cost, 1080.0);
}

#[test]
fn test_total_floors_at_zero_on_excessive_discount() {
    let catalog = vec![item("dal", "Dal Makhani", 10.0)];
    let quote = build_quote(&catalog, &[tier(1, 150.0)], 50.0, &[pick("dal", 1)], 2)
        .expect("quote should succeed");

    assert!(quote.discount_amount > quote.subtotal + quote.misc_cost);
    assert_eq!(quote.total_cost, 0.0);
}

#[test]
fn test_unresolved_items_silently_dropped() {
    let mut unavailable = item("off", "Off Menu", 500.0);
    unavailable.is_available = false;
    let catalog = vec![item("dal", "Dal Makhani", 100.0), unavailable];

    let quote = build_quote(
        &catalog,
        &[],
        0.0,
        &[pick("dal", 1), pick("off", 1), pick("ghost", 3)],
        10,
    )
    .expect("quote should succeed");

    // Only the resolvable, available item contributes
    assert_eq!(quote.items.len(), 1);
    assert_eq!(quote.subtotal, 1000.0);
}

#[test]
fn test_item_ids_accept_table_prefix() {
    let catalog = vec![item("dal", "Dal Makhani", 100.0)];
    let quote = build_quote(&catalog, &[], 0.0, &[pick("menu_item:dal", 1)], 1)
        .expect("quote should succeed");
    assert_eq!(quote.subtotal, 100.0);
}

#[test]
fn test_discount_rounding_two_decimal_places() {
    let catalog = vec![item("dal", "Dal Makhani", 33.33)];
    // subtotal = 33.33 * 1 * 3 = 99.99; 5% = 4.9995 -> 5.00
    let quote = build_quote(&catalog, &[tier(1, 5.0)], 0.0, &[pick("dal", 1)], 3)
        .expect("quote should succeed");

    assert_eq!(quote.subtotal, 99.99);
    assert_eq!(quote.discount_amount, 5.00);
    assert_eq!(quote.total_cost, 94.99);
}

#[test]
fn test_zero_guests_rejected() {
    let catalog = vec![item("dal", "Dal Makhani", 100.0)];
    assert!(build_quote(&catalog, &[], 0.0, &[pick("dal", 1)], 0).is_err());
}

#[test]
fn test_empty_selection_rejected() {
    let catalog = vec![item("dal", "Dal Makhani", 100.0)];
    assert!(build_quote(&catalog, &[], 0.0, &[], 10).is_err());
}
