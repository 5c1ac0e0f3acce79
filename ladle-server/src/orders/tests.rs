use super::*;
use crate::db::DbService;
use crate::pricing::QuoteLine;

#[test]
fn test_order_number_format() {
    assert_eq!(format_order_number(1), "O-01");
    assert_eq!(format_order_number(2), "O-02");
    assert_eq!(format_order_number(9), "O-09");
    assert_eq!(format_order_number(42), "O-42");
    // No cap: wider numbers extend the string
    assert_eq!(format_order_number(100), "O-100");
    assert_eq!(format_order_number(1234), "O-1234");
}

#[test]
fn test_fallback_order_number_uses_last_four_digits() {
    assert_eq!(fallback_order_number(1_699_999_999_123), "O-9123");
    // Zero-padded when the tail is small
    assert_eq!(fallback_order_number(1_700_000_000_042), "O-0042");
}

#[tokio::test]
async fn test_sequential_bookings_get_sequential_numbers() {
    let service = DbService::new_in_memory().await.expect("in-memory db");
    let repo = OrderRepository::new(service.db);

    let first = allocate_order_number(&repo, "caterer:a").await;
    let second = allocate_order_number(&repo, "caterer:a").await;
    let third = allocate_order_number(&repo, "caterer:a").await;

    assert_eq!(first, "O-01");
    assert_eq!(second, "O-02");
    assert_eq!(third, "O-03");
}

#[test]
fn test_forward_transitions_are_legal() {
    use OrderStatus::*;
    let forward = [Pending, Confirmed, Preparing, Ready, Delivered, Completed];
    for pair in forward.windows(2) {
        assert!(
            check_transition(pair[0], pair[1]).is_ok(),
            "{} -> {} should be legal",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_cancellation_legal_from_non_terminal_only() {
    use OrderStatus::*;
    for from in [Pending, Confirmed, Preparing, Ready, Delivered] {
        assert!(check_transition(from, Cancelled).is_ok());
    }
    assert!(check_transition(Completed, Cancelled).is_err());
    assert!(check_transition(Cancelled, Cancelled).is_err());
}

#[test]
fn test_illegal_transitions_rejected() {
    use OrderStatus::*;
    // Skipping ahead
    assert!(check_transition(Pending, Ready).is_err());
    assert!(check_transition(Confirmed, Delivered).is_err());
    // Going backwards
    assert!(check_transition(Ready, Preparing).is_err());
    // Out of a terminal state
    assert!(check_transition(Completed, Pending).is_err());
    assert!(check_transition(Cancelled, Confirmed).is_err());

    let err = check_transition(Pending, Ready).expect_err("must be illegal");
    assert_eq!(err.code, shared::ErrorCode::OrderIllegalTransition);
}

fn sample_quote() -> Quote {
    Quote {
        items: vec![QuoteLine {
            item_id: "menu_item:dal".to_string(),
            name: "Dal Makhani".to_string(),
            quantity: 2,
            unit_price: 100.0,
        }],
        guest_count: 10,
        subtotal: 2000.0,
        misc_cost: 300.0,
        discount_percent: 10.0,
        discount_amount: 230.0,
        per_plate_cost: 200.0,
        total_cost: 2070.0,
    }
}

#[test]
fn test_build_order_pricing_invariants() {
    let customer = CustomerInfo {
        name: "Ravi".to_string(),
        email: "ravi@example.com".to_string(),
        phone: "555-0101".to_string(),
        address: None,
    };
    let event = EventDetails {
        event_date: 1_773_532_800_000,
        event_type: Some("wedding".to_string()),
        venue: None,
        note: None,
    };

    let order = build_order(
        "caterer:a",
        "O-01".to_string(),
        customer,
        event,
        &sample_quote(),
        500.0,
        1_000,
    );

    let p = &order.pricing;
    assert_eq!(p.total, p.subtotal + p.misc_cost - p.discount);
    assert_eq!(p.balance, p.total - p.deposit);
    assert_eq!(p.total, 2070.0);
    assert_eq!(p.balance, 1570.0);
    assert_eq!(p.tax, 0.0);

    // Timeline seeded at creation
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.timeline.len(), 1);
    assert_eq!(order.timeline[0].status, OrderStatus::Pending);
    assert_eq!(order.timeline[0].timestamp, 1_000);

    // Line items snapshot the quote
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].name, "Dal Makhani");
    assert_eq!(order.items[0].unit_price, 100.0);
    assert!(order.items[0].menu_item.is_some());
}
