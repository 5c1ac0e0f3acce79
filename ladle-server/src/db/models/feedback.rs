//! Feedback Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Customer feedback, publicly submitted against a caterer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Caterer the feedback is for
    #[serde(with = "serde_helpers::record_id")]
    pub caterer: RecordId,
    pub customer_name: String,
    pub email: Option<String>,
    /// 1-5 stars
    pub rating: u8,
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCreate {
    pub customer_name: String,
    pub email: Option<String>,
    pub rating: u8,
    pub comment: Option<String>,
}
