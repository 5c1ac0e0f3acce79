//! Event Model (caterer portfolio)

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Portfolio event shown on the public storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Owning caterer reference
    #[serde(with = "serde_helpers::record_id")]
    pub caterer: RecordId,
    pub title: String,
    pub description: Option<String>,
    /// Display date (YYYY-MM-DD)
    pub event_date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_published: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub title: String,
    pub description: Option<String>,
    pub event_date: String,
    pub image: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}
