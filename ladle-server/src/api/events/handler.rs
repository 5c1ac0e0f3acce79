//! Event API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{ensure_owned_by, ok};
use crate::auth::CurrentCaterer;
use crate::core::ServerState;
use crate::db::models::{Event, EventCreate, EventUpdate};
use crate::db::repository::{EventRepository, make_record_id};
use crate::utils::time::parse_date;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use shared::{ApiResponse, AppError, ErrorCode, error::AppResult};

/// GET /api/events - the caterer's portfolio events
pub async fn list(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
) -> AppResult<Json<ApiResponse<Vec<Event>>>> {
    let repo = EventRepository::new(state.db.clone());
    let events = repo.find_by_caterer(&caterer.id).await?;
    Ok(ok(events))
}

/// POST /api/events - create a portfolio event
pub async fn create(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Json(payload): Json<EventCreate>,
) -> AppResult<Json<ApiResponse<Event>>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    parse_date(&payload.event_date)?;

    let repo = EventRepository::new(state.db.clone());
    let event = repo
        .create(make_record_id("caterer", &caterer.id), payload)
        .await?;
    Ok(ok(event))
}

/// PUT /api/events/:id - update a portfolio event
pub async fn update(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
    Json(payload): Json<EventUpdate>,
) -> AppResult<Json<ApiResponse<Event>>> {
    if let Some(title) = &payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if let Some(date) = &payload.event_date {
        parse_date(date)?;
    }

    let repo = EventRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EventNotFound))?;
    ensure_owned_by(&existing.caterer, &caterer)?;

    let event = repo.update(&id, payload).await?;
    Ok(ok(event))
}

/// DELETE /api/events/:id - delete a portfolio event
pub async fn delete(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = EventRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EventNotFound))?;
    ensure_owned_by(&existing.caterer, &caterer)?;

    repo.delete(&id).await?;
    Ok(ok(true))
}
