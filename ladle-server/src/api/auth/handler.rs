//! Auth API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::api::ok;
use crate::auth::{CurrentCaterer, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::models::{CatererCreate, CatererProfile};
use crate::db::repository::CatererRepository;
use crate::otp::MIN_PASSWORD_LEN;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN,
    validate_email, validate_optional_text, validate_required_text,
};
use shared::{ApiResponse, AppError, ErrorCode, error::AppResult, util::normalize_email};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub caterer: CatererProfile,
}

/// POST /api/auth/register - create a caterer account
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    validate_required_text(&payload.business_name, "business_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.owner_name, "owner_name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if payload.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }
    if payload.password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation("password is too long"));
    }

    let email = normalize_email(&payload.email);
    let repo = CatererRepository::new(state.db.clone());

    if repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered));
    }

    let hash_pass = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let caterer = repo
        .create(CatererCreate {
            business_name: payload.business_name,
            owner_name: payload.owner_name,
            email,
            hash_pass,
            phone: payload.phone,
            address: payload.address,
            description: payload.description,
        })
        .await?;

    let id = caterer.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    let token = state
        .jwt_service
        .generate_token(&id, &caterer.business_name)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(caterer = %id, "Caterer registered");

    Ok(ok(AuthResponse {
        token,
        caterer: caterer.into(),
    }))
}

/// POST /api/auth/login - exchange credentials for a token
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let email = normalize_email(&payload.email);
    let repo = CatererRepository::new(state.db.clone());

    let caterer = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&payload.password, &caterer.hash_pass) {
        return Err(AppError::invalid_credentials());
    }

    if !caterer.is_active {
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    let id = caterer.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    let token = state
        .jwt_service
        .generate_token(&id, &caterer.business_name)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    Ok(ok(AuthResponse {
        token,
        caterer: caterer.into(),
    }))
}

/// GET /api/auth/me - the authenticated caterer's profile
pub async fn me(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
) -> AppResult<Json<ApiResponse<CatererProfile>>> {
    let repo = CatererRepository::new(state.db.clone());
    let profile = repo
        .find_by_id(&caterer.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CatererNotFound))?;
    Ok(ok(profile.into()))
}
