//! API Response types
//!
//! Every endpoint answers with the same envelope:
//! ```json
//! { "success": true, "data": { ... } }
//! { "success": false, "message": "..." }
//! ```

use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response payload (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message (present on failure, optional on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create a successful response with a message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Empty success payload for endpoints that only acknowledge
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Acknowledged {
    pub acknowledged: bool,
}

impl Acknowledged {
    pub fn yes() -> Self {
        Self { acknowledged: true }
    }
}
