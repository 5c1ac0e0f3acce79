//! Password reset (OTP) API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth/forgot-password", reset_routes())
}

fn reset_routes() -> Router<ServerState> {
    Router::new()
        .route("/send-otp", post(handler::send_otp))
        .route("/verify-otp", post(handler::verify_otp))
        .route("/reset-password", post(handler::reset_password))
}
