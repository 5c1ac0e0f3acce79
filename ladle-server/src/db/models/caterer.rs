//! Caterer Model (tenant root)

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// A `{min guests, discount percent}` pricing tier.
/// The qualifying tier with the highest `min_guests` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub min_guests: u32,
    pub discount_percent: f64,
}

/// Caterer model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caterer {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub business_name: String,
    pub owner_name: String,
    /// Lowercased, unique
    pub email: String,
    pub hash_pass: String,
    #[serde(default)]
    pub phone: String,
    pub address: Option<String>,
    pub description: Option<String>,
    /// Daily booking cap used by the availability check
    #[serde(default = "default_max_daily_bookings")]
    pub max_daily_bookings: i64,
    /// Flat fee added to every quote before discount
    #[serde(default)]
    pub misc_cost: f64,
    /// Guest-count discount tiers
    #[serde(default)]
    pub dynamic_pricing: Vec<DiscountTier>,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
}

fn default_max_daily_bookings() -> i64 {
    3
}

fn default_true() -> bool {
    true
}

/// Create caterer payload (registration)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatererCreate {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub hash_pass: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// Update caterer business profile payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatererUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update pricing configuration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_pricing: Option<Vec<DiscountTier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_daily_bookings: Option<i64>,
}

/// Caterer profile without credentials (API responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatererProfile {
    pub id: String,
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub max_daily_bookings: i64,
    pub misc_cost: f64,
    pub dynamic_pricing: Vec<DiscountTier>,
    pub created_at: i64,
}

impl From<Caterer> for CatererProfile {
    fn from(c: Caterer) -> Self {
        Self {
            id: c.id.map(|id| id.to_string()).unwrap_or_default(),
            business_name: c.business_name,
            owner_name: c.owner_name,
            email: c.email,
            phone: c.phone,
            address: c.address,
            description: c.description,
            max_daily_bookings: c.max_daily_bookings,
            misc_cost: c.misc_cost,
            dynamic_pricing: c.dynamic_pricing,
            created_at: c.created_at,
        }
    }
}
