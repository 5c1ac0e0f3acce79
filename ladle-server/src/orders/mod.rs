//! Order lifecycle
//!
//! Order-number allocation, status-transition checks and booking
//! assembly. Persistence lives in [`crate::db::repository::order`]; this
//! module owns the rules.

use surrealdb::RecordId;

use crate::db::models::{
    CustomerInfo, EventDetails, Order, OrderItem, OrderPricing, OrderStatus, TimelineEntry,
};
use crate::db::repository::{OrderRepository, make_record_id};
use crate::pricing::Quote;
use crate::pricing::money::{to_decimal, to_f64};
use shared::{AppError, ErrorCode, error::AppResult};

/// Zero-padded display format for a sequence value: 1 → "O-01".
/// Three-digit values simply extend the string ("O-100").
pub fn format_order_number(seq: i64) -> String {
    format!("O-{:02}", seq)
}

/// Collision-prone but error-tolerant fallback when sequence allocation
/// fails: the last 4 digits of the current epoch millis.
pub fn fallback_order_number(now_millis: i64) -> String {
    format!("O-{:04}", now_millis.rem_euclid(10_000))
}

/// Allocate the next order number for a caterer
///
/// The sequence value comes from an atomic counter increment; an
/// allocation failure degrades to the timestamp fallback instead of
/// failing the booking.
pub async fn allocate_order_number(repo: &OrderRepository, caterer_id: &str) -> String {
    match repo.next_sequence(caterer_id).await {
        Ok(seq) => format_order_number(seq),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Order sequence allocation failed, using timestamp fallback"
            );
            fallback_order_number(shared::util::now_millis())
        }
    }
}

/// Check a status change against the transition table
///
/// # Errors
///
/// `OrderIllegalTransition` (422) when the change is not legal from the
/// current status.
pub fn check_transition(current: OrderStatus, next: OrderStatus) -> AppResult<()> {
    if !current.can_transition_to(next) {
        return Err(AppError::with_message(
            ErrorCode::OrderIllegalTransition,
            format!("Cannot change order status from {} to {}", current, next),
        ));
    }
    Ok(())
}

/// Assemble a persistable order from a booking request and its
/// server-derived quote
///
/// The pricing block is recomputed here rather than trusted from the
/// caller: `total = subtotal + misc_cost - discount`,
/// `balance = total - deposit`. The timeline is seeded with the initial
/// status entry, so it is never empty once persisted.
pub fn build_order(
    caterer_id: &str,
    order_number: String,
    customer: CustomerInfo,
    event: EventDetails,
    quote: &Quote,
    deposit: f64,
    now_millis: i64,
) -> Order {
    let items: Vec<OrderItem> = quote
        .items
        .iter()
        .map(|line| OrderItem {
            menu_item: line.item_id.parse::<RecordId>().ok(),
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
        })
        .collect();

    let subtotal = to_decimal(quote.subtotal);
    let misc_cost = to_decimal(quote.misc_cost);
    let discount = to_decimal(quote.discount_amount);
    let total = (subtotal + misc_cost - discount).max(rust_decimal::Decimal::ZERO);
    let balance = total - to_decimal(deposit);

    let status = OrderStatus::Pending;

    Order {
        id: None,
        order_number,
        caterer: make_record_id("caterer", caterer_id),
        customer,
        event,
        guest_count: quote.guest_count,
        items,
        pricing: OrderPricing {
            subtotal: to_f64(subtotal),
            misc_cost: to_f64(misc_cost),
            discount: to_f64(discount),
            tax: 0.0,
            total: to_f64(total),
            deposit,
            balance: to_f64(balance),
        },
        status,
        timeline: vec![TimelineEntry {
            status,
            timestamp: now_millis,
            note: Some("Order created".to_string()),
        }],
        created_at: now_millis,
    }
}

#[cfg(test)]
mod tests;
