//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{ensure_owned_by, ok};
use crate::auth::CurrentCaterer;
use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::{MenuItemRepository, make_record_id};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_amount, validate_optional_text, validate_required_text,
};
use shared::{ApiResponse, AppError, ErrorCode, error::AppResult};

/// GET /api/menu-items - the caterer's menu (management view)
pub async fn list(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
) -> AppResult<Json<ApiResponse<Vec<MenuItem>>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_by_caterer(&caterer.id).await?;
    Ok(ok(items))
}

/// GET /api/menu-items/:id - one menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    ensure_owned_by(&item.caterer, &caterer)?;
    Ok(ok(item))
}

/// POST /api/menu-items - create a menu item
pub async fn create(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_amount(payload.price, "price")?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .create(make_record_id("caterer", &caterer.id), payload)
        .await?;
    Ok(ok(item))
}

/// PUT /api/menu-items/:id - update a menu item
pub async fn update(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if let Some(price) = payload.price {
        validate_amount(price, "price")?;
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    ensure_owned_by(&existing.caterer, &caterer)?;

    let item = repo.update(&id, payload).await?;
    Ok(ok(item))
}

/// DELETE /api/menu-items/:id - delete a menu item
pub async fn delete(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    ensure_owned_by(&existing.caterer, &caterer)?;

    repo.delete(&id).await?;
    Ok(ok(true))
}
