//! Availability checker
//!
//! A date is available while the caterer's non-cancelled bookings for
//! that day stay below `max_daily_bookings`.

use serde::{Deserialize, Serialize};

use crate::db::models::Caterer;
use crate::db::repository::OrderRepository;
use crate::utils::time::{day_end_millis, day_start_millis, parse_date, validate_not_past};
use shared::error::AppResult;

/// Availability verdict for one caterer and one calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    /// The checked date (YYYY-MM-DD)
    pub date: String,
    /// Non-cancelled bookings already on that date
    pub booked: i64,
    pub max_daily_bookings: i64,
    pub is_available: bool,
}

/// Check whether a caterer can take another booking on a date
///
/// # Errors
///
/// `ValidationFailed` on an unparseable date or a date before today.
pub async fn check(
    orders: &OrderRepository,
    caterer: &Caterer,
    date_str: &str,
) -> AppResult<AvailabilityVerdict> {
    let date = parse_date(date_str)?;
    validate_not_past(date)?;

    let start = day_start_millis(date);
    let end = day_end_millis(date);

    let caterer_id = caterer
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();
    let booked = orders
        .count_for_event_window(&caterer_id, start, end)
        .await?;

    let max_daily_bookings = caterer.max_daily_bookings;

    Ok(AvailabilityVerdict {
        date: date_str.to_string(),
        booked,
        max_daily_bookings,
        is_available: booked < max_daily_bookings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::{
        CustomerInfo, EventDetails, Order, OrderPricing, OrderStatus, TimelineEntry,
    };
    use crate::db::repository::make_record_id;
    use crate::utils::time::today_utc;

    fn sample_caterer(max_daily_bookings: i64) -> Caterer {
        Caterer {
            id: Some(make_record_id("caterer", "a")),
            business_name: "Spice Route".to_string(),
            owner_name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            hash_pass: String::new(),
            phone: String::new(),
            address: None,
            description: None,
            max_daily_bookings,
            misc_cost: 0.0,
            dynamic_pricing: Vec::new(),
            is_active: true,
            created_at: 0,
        }
    }

    fn order_on(event_date: i64, number: &str) -> Order {
        Order {
            id: None,
            order_number: number.to_string(),
            caterer: make_record_id("caterer", "a"),
            customer: CustomerInfo {
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                phone: "555-0101".to_string(),
                address: None,
            },
            event: EventDetails {
                event_date,
                event_type: None,
                venue: None,
                note: None,
            },
            guest_count: 50,
            items: vec![],
            pricing: OrderPricing {
                subtotal: 0.0,
                misc_cost: 0.0,
                discount: 0.0,
                tax: 0.0,
                total: 0.0,
                deposit: 0.0,
                balance: 0.0,
            },
            status: OrderStatus::Pending,
            timeline: vec![TimelineEntry {
                status: OrderStatus::Pending,
                timestamp: 0,
                note: None,
            }],
            created_at: 0,
        }
    }

    #[tokio::test]
    async fn test_rejects_past_and_malformed_dates() {
        let service = DbService::new_in_memory().await.expect("in-memory db");
        let repo = OrderRepository::new(service.db);
        let caterer = sample_caterer(3);

        assert!(check(&repo, &caterer, "not-a-date").await.is_err());
        assert!(check(&repo, &caterer, "2020-01-01").await.is_err());
    }

    #[tokio::test]
    async fn test_cap_reached_flips_availability() {
        let service = DbService::new_in_memory().await.expect("in-memory db");
        let repo = OrderRepository::new(service.db);
        let caterer = sample_caterer(3);

        let date = today_utc();
        let date_str = date.format("%Y-%m-%d").to_string();
        let start = day_start_millis(date);

        for (i, number) in ["O-01", "O-02"].iter().enumerate() {
            repo.create(order_on(start + i as i64, number))
                .await
                .expect("create");
        }

        let verdict = check(&repo, &caterer, &date_str).await.expect("check");
        assert_eq!(verdict.booked, 2);
        assert!(verdict.is_available);

        repo.create(order_on(start + 10, "O-03")).await.expect("create");

        let verdict = check(&repo, &caterer, &date_str).await.expect("check");
        assert_eq!(verdict.booked, 3);
        assert_eq!(verdict.max_daily_bookings, 3);
        assert!(!verdict.is_available);
    }
}
