//! Order Model
//!
//! A persisted booking with an append-only status timeline. The timeline
//! is seeded with one entry at creation and grows on every status change.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

// =============================================================================
// Status
// =============================================================================

/// Order status
///
/// Forward flow: pending → confirmed → preparing → ready → delivered →
/// completed. `cancelled` is reachable from any non-terminal status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether this status admits no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether `next` is a legal transition from this status
    pub fn can_transition_to(&self, next: Self) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Pending, Confirmed)
            | (Confirmed, Preparing)
            | (Preparing, Ready)
            | (Ready, Delivered)
            | (Delivered, Completed) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Embedded objects
// =============================================================================

/// Customer snapshot taken at booking time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

/// Event details for the booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event date as Unix millis (start of day)
    pub event_date: i64,
    pub event_type: Option<String>,
    pub venue: Option<String>,
    pub note: Option<String>,
}

/// Line item snapshot (name and unit price frozen at booking time)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item reference (may be dangling if the item is later deleted)
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub menu_item: Option<RecordId>,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Pricing block, derived server-side from the catalog at booking time
///
/// Invariants: `total = subtotal + misc_cost - discount`,
/// `balance = total - deposit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPricing {
    pub subtotal: f64,
    pub misc_cost: f64,
    pub discount: f64,
    #[serde(default)]
    pub tax: f64,
    pub total: f64,
    #[serde(default)]
    pub deposit: f64,
    pub balance: f64,
}

/// One entry of the append-only status timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: OrderStatus,
    /// Unix millis
    pub timestamp: i64,
    pub note: Option<String>,
}

// =============================================================================
// Order
// =============================================================================

/// Persisted booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Human-readable order number ("O-01", "O-02", ...)
    pub order_number: String,
    /// Owning caterer reference
    #[serde(with = "serde_helpers::record_id")]
    pub caterer: RecordId,
    pub customer: CustomerInfo,
    pub event: EventDetails,
    pub guest_count: u32,
    pub items: Vec<OrderItem>,
    pub pricing: OrderPricing,
    pub status: OrderStatus,
    pub timeline: Vec<TimelineEntry>,
    pub created_at: i64,
}
