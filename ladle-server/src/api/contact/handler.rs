//! Contact API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{ensure_owned_by, ok};
use crate::auth::CurrentCaterer;
use crate::core::ServerState;
use crate::db::models::Contact;
use crate::db::repository::ContactRepository;
use shared::{ApiResponse, AppError, error::AppResult};

/// GET /api/contact - contact messages received by the caterer
pub async fn list(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
) -> AppResult<Json<ApiResponse<Vec<Contact>>>> {
    let repo = ContactRepository::new(state.db.clone());
    let messages = repo.find_by_caterer(&caterer.id).await?;
    Ok(ok(messages))
}

/// DELETE /api/contact/:id - remove a contact message
pub async fn delete(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = ContactRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Contact message"))?;
    ensure_owned_by(&existing.caterer, &caterer)?;

    repo.delete(&id).await?;
    Ok(ok(true))
}
