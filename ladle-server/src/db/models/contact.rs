//! Contact Message Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Contact message, publicly submitted against a caterer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Caterer the message is for
    #[serde(with = "serde_helpers::record_id")]
    pub caterer: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}
