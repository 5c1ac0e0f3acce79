//! Password Reset OTP Model
//!
//! Short-lived credential-recovery record. All records for an email are
//! purged on expiry detection and after a successful password reset.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetOtp {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Lowercased email the code was issued for
    pub email: String,
    /// 6-digit numeric code
    pub code: String,
    /// Unix millis; 2 minutes after issuance
    pub expires_at: i64,
    /// Set by the verify step; required by the reset step
    #[serde(default)]
    pub is_used: bool,
    pub created_at: i64,
}
