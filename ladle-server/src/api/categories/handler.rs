//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{ensure_owned_by, ok};
use crate::auth::CurrentCaterer;
use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::db::repository::{CategoryRepository, make_record_id};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use shared::{ApiResponse, AppError, ErrorCode, error::AppResult};

/// GET /api/categories - the caterer's categories
pub async fn list(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_by_caterer(&caterer.id).await?;
    Ok(ok(categories))
}

/// POST /api/categories - create a category
pub async fn create(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<ApiResponse<Category>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .create(make_record_id("caterer", &caterer.id), payload)
        .await?;
    Ok(ok(category))
}

/// PUT /api/categories/:id - update a category
pub async fn update(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<ApiResponse<Category>>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }

    let repo = CategoryRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;
    ensure_owned_by(&existing.caterer, &caterer)?;

    let category = repo.update(&id, payload).await?;
    Ok(ok(category))
}

/// DELETE /api/categories/:id - delete a category
pub async fn delete(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;
    ensure_owned_by(&existing.caterer, &caterer)?;

    repo.delete(&id).await?;
    Ok(ok(true))
}
