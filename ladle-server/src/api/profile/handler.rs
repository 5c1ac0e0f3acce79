//! Profile API Handlers

use axum::{Json, extract::State};

use crate::api::ok;
use crate::auth::CurrentCaterer;
use crate::core::ServerState;
use crate::db::models::{CatererProfile, CatererUpdate, PricingConfigUpdate};
use crate::db::repository::CatererRepository;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_amount,
    validate_optional_text,
};
use shared::{ApiResponse, AppError, error::AppResult};

/// GET /api/profile - business profile and pricing configuration
pub async fn get_profile(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
) -> AppResult<Json<ApiResponse<CatererProfile>>> {
    let repo = CatererRepository::new(state.db.clone());
    let profile = repo
        .find_by_id(&caterer.id)
        .await?
        .ok_or_else(|| AppError::new(shared::ErrorCode::CatererNotFound))?;
    Ok(ok(profile.into()))
}

/// PUT /api/profile - update the business profile
pub async fn update_profile(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Json(payload): Json<CatererUpdate>,
) -> AppResult<Json<ApiResponse<CatererProfile>>> {
    if let Some(name) = &payload.business_name {
        crate::utils::validation::validate_required_text(name, "business_name", MAX_NAME_LEN)?;
    }
    if let Some(name) = &payload.owner_name {
        crate::utils::validation::validate_required_text(name, "owner_name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = CatererRepository::new(state.db.clone());
    let updated = repo.update_profile(&caterer.id, payload).await?;
    Ok(ok(updated.into()))
}

/// PUT /api/profile/pricing - update misc cost, discount tiers and the
/// daily booking cap
pub async fn update_pricing(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Json(payload): Json<PricingConfigUpdate>,
) -> AppResult<Json<ApiResponse<CatererProfile>>> {
    if let Some(misc_cost) = payload.misc_cost {
        validate_amount(misc_cost, "misc_cost")?;
    }
    if let Some(tiers) = &payload.dynamic_pricing {
        for tier in tiers {
            if tier.min_guests < 1 {
                return Err(AppError::validation("tier min_guests must be at least 1"));
            }
            validate_amount(tier.discount_percent, "discount_percent")?;
        }
    }
    if let Some(cap) = payload.max_daily_bookings
        && cap < 1
    {
        return Err(AppError::validation(
            "max_daily_bookings must be at least 1",
        ));
    }

    let repo = CatererRepository::new(state.db.clone());
    let updated = repo.update_pricing(&caterer.id, payload).await?;
    Ok(ok(updated.into()))
}
