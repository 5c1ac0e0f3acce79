//! Feedback API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{ensure_owned_by, ok};
use crate::auth::CurrentCaterer;
use crate::core::ServerState;
use crate::db::models::Feedback;
use crate::db::repository::FeedbackRepository;
use shared::{ApiResponse, AppError, error::AppResult};

/// GET /api/feedback - feedback received by the caterer
pub async fn list(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
) -> AppResult<Json<ApiResponse<Vec<Feedback>>>> {
    let repo = FeedbackRepository::new(state.db.clone());
    let feedback = repo.find_by_caterer(&caterer.id).await?;
    Ok(ok(feedback))
}

/// DELETE /api/feedback/:id - remove a feedback entry
pub async fn delete(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = FeedbackRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Feedback"))?;
    ensure_owned_by(&existing.caterer, &caterer)?;

    repo.delete(&id).await?;
    Ok(ok(true))
}
