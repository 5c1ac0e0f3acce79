//! Customer Model
//!
//! Snapshot record upserted by email whenever a booking is placed.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    /// Lowercased, unique
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    /// Unix millis of the most recent booking
    #[serde(default)]
    pub last_order_at: i64,
}
