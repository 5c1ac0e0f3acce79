//! Password reset (OTP) API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::api::ok_with_message;
use crate::core::ServerState;
use crate::db::repository::{CatererRepository, PasswordResetOtpRepository};
use crate::otp;
use crate::utils::validation::validate_email;
use shared::{ApiResponse, error::AppResult, response::Acknowledged, util::normalize_email};

#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// POST /api/auth/forgot-password/send-otp
///
/// An unknown email is acknowledged without issuing a code, so the
/// endpoint cannot be used to probe registered addresses. Rate-limit and
/// delivery failures do surface.
pub async fn send_otp(
    State(state): State<ServerState>,
    Json(payload): Json<SendOtpRequest>,
) -> AppResult<Json<ApiResponse<Acknowledged>>> {
    validate_email(&payload.email)?;
    let email = normalize_email(&payload.email);

    let caterers = CatererRepository::new(state.db.clone());
    if caterers.find_by_email(&email).await?.is_some() {
        let otps = PasswordResetOtpRepository::new(state.db.clone());
        otp::issue(&otps, &state.email, &email, shared::util::now_millis()).await?;
    }

    Ok(ok_with_message(
        Acknowledged::yes(),
        "If the email exists, a reset code has been sent",
    ))
}

/// POST /api/auth/forgot-password/verify-otp
pub async fn verify_otp(
    State(state): State<ServerState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> AppResult<Json<ApiResponse<Acknowledged>>> {
    let email = normalize_email(&payload.email);
    let otps = PasswordResetOtpRepository::new(state.db.clone());

    otp::verify(&otps, &email, payload.code.trim(), shared::util::now_millis()).await?;

    Ok(ok_with_message(Acknowledged::yes(), "Code verified"))
}

/// POST /api/auth/forgot-password/reset-password
pub async fn reset_password(
    State(state): State<ServerState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> AppResult<Json<ApiResponse<Acknowledged>>> {
    let email = normalize_email(&payload.email);
    let otps = PasswordResetOtpRepository::new(state.db.clone());
    let caterers = CatererRepository::new(state.db.clone());

    otp::reset(
        &otps,
        &caterers,
        &email,
        payload.code.trim(),
        &payload.new_password,
        &payload.confirm_password,
        shared::util::now_millis(),
    )
    .await?;

    Ok(ok_with_message(Acknowledged::yes(), "Password has been reset"))
}
