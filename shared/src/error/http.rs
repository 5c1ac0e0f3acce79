//! Axum response mapping for [`AppError`]
//!
//! Errors render the same envelope as successful responses:
//! `{ "success": false, "message": "...", "code": <u16> }`.
//! 5xx causes are logged server-side and never leaked to the client.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

use super::types::AppError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    code: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        // Internal causes stay in the logs, the client gets the generic message
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = %self.code, error = %self.message, "Request failed");
            self.code.message().to_string()
        } else {
            self.message
        };

        let body = Json(ErrorBody {
            success: false,
            message,
            code: self.code.into(),
        });

        (status, body).into_response()
    }
}
