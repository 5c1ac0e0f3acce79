//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::api::{ensure_owned_by, ok};
use crate::auth::CurrentCaterer;
use crate::core::ServerState;
use crate::db::models::{Order, OrderStatus, TimelineEntry};
use crate::db::repository::OrderRepository;
use crate::orders::check_transition;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use shared::{ApiResponse, AppError, ErrorCode, error::AppResult};

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
    pub note: Option<String>,
}

/// GET /api/orders - the caterer's orders, newest first
pub async fn list(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_caterer(&caterer.id).await?;
    Ok(ok(orders))
}

/// GET /api/orders/:id - one order with its full timeline
pub async fn get_by_id(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;
    ensure_owned_by(&order.caterer, &caterer)?;
    Ok(ok(order))
}

/// GET /api/orders/by-number/:number - look an order up by its
/// human-readable number
pub async fn get_by_number(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(number): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_number(&caterer.id, &number)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;
    Ok(ok(order))
}

/// PUT /api/orders/:id/status - advance the order through its lifecycle
///
/// Appends a timeline entry; earlier entries are never rewritten.
pub async fn update_status(
    State(state): State<ServerState>,
    caterer: CurrentCaterer,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    validate_optional_text(&payload.note, "note", MAX_NOTE_LEN)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;
    ensure_owned_by(&order.caterer, &caterer)?;

    check_transition(order.status, payload.status)?;

    let entry = TimelineEntry {
        status: payload.status,
        timestamp: shared::util::now_millis(),
        note: payload.note,
    };
    let updated = repo.update_status(&id, payload.status, entry).await?;

    tracing::info!(
        order = %updated.order_number,
        status = %payload.status,
        "Order status updated"
    );

    Ok(ok(updated))
}
