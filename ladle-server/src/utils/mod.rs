//! Utility module - common helpers and re-exports
//!
//! - [`AppError`] / [`AppResult`] - application error types (from `shared`)
//! - logging, time and validation helpers

pub mod logger;
pub mod time;
pub mod validation;

use axum::Json;
use serde::Serialize;

pub use shared::error::{AppError, AppResult};
pub use shared::response::ApiResponse;

/// Create a successful response envelope
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}

/// Create a successful response envelope with a message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok_with_message(data, message))
}
