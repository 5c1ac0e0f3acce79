//! Order Repository
//!
//! Persistence for bookings, the per-caterer order-number sequence and the
//! per-day booking counts used by the availability check.

use super::{BaseRepository, RepoError, RepoResult, make_record_id, record_key};
use crate::db::models::{Order, OrderStatus, TimelineEntry};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ORDER_TABLE: &str = "order";
const SEQUENCE_TABLE: &str = "order_sequence";

#[derive(Debug, Deserialize)]
struct SequenceRow {
    value: i64,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Allocate the next order-sequence value for a caterer
    ///
    /// The counter lives in a dedicated record keyed by the caterer and is
    /// bumped in a single statement, so concurrent bookings cannot observe
    /// the same value.
    pub async fn next_sequence(&self, caterer_id: &str) -> RepoResult<i64> {
        let key = record_key("caterer", caterer_id).to_string();
        let mut result = self
            .base
            .db()
            .query("UPSERT type::thing($table, $key) SET value += 1 RETURN AFTER")
            .bind(("table", SEQUENCE_TABLE))
            .bind(("key", key))
            .await?;
        let rows: Vec<SequenceRow> = result.take(0)?;
        rows.into_iter()
            .next()
            .map(|r| r.value)
            .ok_or_else(|| RepoError::Database("Sequence allocation returned no row".to_string()))
    }

    /// Persist a new order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let key = record_key(ORDER_TABLE, id);
        let order: Option<Order> = self.base.db().select((ORDER_TABLE, key)).await?;
        Ok(order)
    }

    /// Find a caterer's order by its order number
    pub async fn find_by_number(
        &self,
        caterer_id: &str,
        order_number: &str,
    ) -> RepoResult<Option<Order>> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let number = order_number.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE caterer = $caterer AND order_number = $number LIMIT 1")
            .bind(("caterer", caterer))
            .bind(("number", number))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// List a caterer's orders, newest first
    pub async fn find_by_caterer(&self, caterer_id: &str) -> RepoResult<Vec<Order>> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE caterer = $caterer ORDER BY created_at DESC")
            .bind(("caterer", caterer))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Count non-cancelled orders whose event date falls inside
    /// `[start_millis, end_millis]`
    pub async fn count_for_event_window(
        &self,
        caterer_id: &str,
        start_millis: i64,
        end_millis: i64,
    ) -> RepoResult<i64> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT count() FROM order \
                 WHERE caterer = $caterer \
                   AND event.event_date >= $start \
                   AND event.event_date <= $end \
                   AND status != 'cancelled' \
                 GROUP ALL",
            )
            .bind(("caterer", caterer))
            .bind(("start", start_millis))
            .bind(("end", end_millis))
            .await?;
        let rows: Vec<CountRow> = result.take(0)?;
        Ok(rows.into_iter().next().map(|r| r.count).unwrap_or(0))
    }

    /// Replace the status and append a timeline entry
    ///
    /// Transition legality is the caller's responsibility; the timeline
    /// itself is append-only.
    pub async fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
        entry: TimelineEntry,
    ) -> RepoResult<Order> {
        let thing = make_record_id(ORDER_TABLE, id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status, timeline += $entry RETURN AFTER")
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("entry", entry))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }
}
