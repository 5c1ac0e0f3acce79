//! Public storefront handlers
//!
//! Every handler resolves the caterer from the path first; an unknown or
//! deactivated caterer is a 404 across the whole surface.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::api::ok;
use crate::availability::{self, AvailabilityVerdict};
use crate::core::ServerState;
use crate::db::models::{
    Caterer, Category, ContactCreate, CustomerInfo, Customer, Event, EventDetails, FeedbackCreate,
    MenuItem, Order,
};
use crate::db::repository::{
    CatererRepository, CategoryRepository, ContactRepository, CustomerRepository, EventRepository,
    FeedbackRepository, MenuItemRepository, OrderRepository, make_record_id,
};
use crate::orders::{allocate_order_number, build_order};
use crate::pricing::{Quote, QuoteItemInput, build_quote};
use crate::utils::time::{day_start_millis, parse_date, validate_not_past};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
    validate_amount, validate_email, validate_optional_text, validate_rating,
    validate_required_text,
};
use shared::{ApiResponse, AppError, ErrorCode, error::AppResult, util::normalize_email};

/// Resolve an active caterer or 404
async fn resolve_caterer(state: &ServerState, caterer_id: &str) -> AppResult<Caterer> {
    let repo = CatererRepository::new(state.db.clone());
    repo.find_active_by_id(caterer_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CatererNotFound))
}

// =============================================================================
// Menu & events
// =============================================================================

/// Caterer header shown on the storefront
#[derive(Debug, Serialize)]
pub struct StorefrontCaterer {
    pub id: String,
    pub business_name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub caterer: StorefrontCaterer,
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
}

/// GET /api/public/caterers/:caterer_id/menu - browsable menu
pub async fn get_menu(
    State(state): State<ServerState>,
    Path(caterer_id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuResponse>>> {
    let caterer = resolve_caterer(&state, &caterer_id).await?;

    let categories = CategoryRepository::new(state.db.clone())
        .find_by_caterer(&caterer_id)
        .await?;
    let items = MenuItemRepository::new(state.db.clone())
        .find_available_by_caterer(&caterer_id)
        .await?;

    Ok(ok(MenuResponse {
        caterer: StorefrontCaterer {
            id: caterer.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            business_name: caterer.business_name,
            description: caterer.description,
            address: caterer.address,
            phone: caterer.phone,
        },
        categories,
        items,
    }))
}

/// GET /api/public/caterers/:caterer_id/events - published portfolio
pub async fn list_events(
    State(state): State<ServerState>,
    Path(caterer_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Event>>>> {
    resolve_caterer(&state, &caterer_id).await?;
    let events = EventRepository::new(state.db.clone())
        .find_published_by_caterer(&caterer_id)
        .await?;
    Ok(ok(events))
}

// =============================================================================
// Quote & availability
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub guest_count: u32,
    pub items: Vec<QuoteItemInput>,
}

/// POST /api/public/caterers/:caterer_id/quote - price estimate
pub async fn quote(
    State(state): State<ServerState>,
    Path(caterer_id): Path<String>,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<ApiResponse<Quote>>> {
    let caterer = resolve_caterer(&state, &caterer_id).await?;

    let catalog = MenuItemRepository::new(state.db.clone())
        .find_available_by_caterer(&caterer_id)
        .await?;

    let quote = build_quote(
        &catalog,
        &caterer.dynamic_pricing,
        caterer.misc_cost,
        &payload.items,
        payload.guest_count,
    )?;

    Ok(ok(quote))
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub date: String,
}

/// GET /api/public/caterers/:caterer_id/availability?date=YYYY-MM-DD
pub async fn availability(
    State(state): State<ServerState>,
    Path(caterer_id): Path<String>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<Json<ApiResponse<AvailabilityVerdict>>> {
    let caterer = resolve_caterer(&state, &caterer_id).await?;
    let orders = OrderRepository::new(state.db.clone());
    let verdict = availability::check(&orders, &caterer, &params.date).await?;
    Ok(ok(verdict))
}

// =============================================================================
// Booking
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct BookingEvent {
    /// YYYY-MM-DD
    pub event_date: String,
    pub event_type: Option<String>,
    pub venue: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub customer: CustomerInfo,
    pub event: BookingEvent,
    pub items: Vec<QuoteItemInput>,
    pub guest_count: u32,
    pub deposit: Option<f64>,
    /// Pre-issued order number (e.g. from an accepted quote); generation
    /// is skipped when present
    pub order_number: Option<String>,
}

/// POST /api/public/caterers/:caterer_id/bookings - place a booking
///
/// Pricing is re-derived from the catalog on the server; the caller
/// supplies selections, not totals.
pub async fn create_booking(
    State(state): State<ServerState>,
    Path(caterer_id): Path<String>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let caterer = resolve_caterer(&state, &caterer_id).await?;

    // Customer snapshot
    validate_required_text(&payload.customer.name, "customer.name", MAX_NAME_LEN)?;
    validate_email(&payload.customer.email)?;
    validate_required_text(&payload.customer.phone, "customer.phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.customer.address, "customer.address", MAX_ADDRESS_LEN)?;

    // Event details
    let event_date = parse_date(&payload.event.event_date)?;
    validate_not_past(event_date)?;
    validate_optional_text(&payload.event.event_type, "event.event_type", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.event.venue, "event.venue", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.event.note, "event.note", MAX_NOTE_LEN)?;

    // Selections
    if payload.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    let deposit = payload.deposit.unwrap_or(0.0);
    validate_amount(deposit, "deposit")?;

    // Server-side pricing from the catalog
    let catalog = MenuItemRepository::new(state.db.clone())
        .find_available_by_caterer(&caterer_id)
        .await?;
    let quote = build_quote(
        &catalog,
        &caterer.dynamic_pricing,
        caterer.misc_cost,
        &payload.items,
        payload.guest_count,
    )?;
    if quote.items.is_empty() {
        return Err(AppError::validation(
            "none of the selected items are currently orderable",
        ));
    }
    if deposit > quote.total_cost {
        return Err(AppError::validation("deposit exceeds the order total"));
    }

    let orders = OrderRepository::new(state.db.clone());
    let order_number = match payload
        .order_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        Some(number) => {
            validate_required_text(number, "order_number", MAX_SHORT_TEXT_LEN)?;
            number.to_string()
        }
        None => allocate_order_number(&orders, &caterer_id).await,
    };

    let now = shared::util::now_millis();
    let customer_email = normalize_email(&payload.customer.email);
    let customer = CustomerInfo {
        name: payload.customer.name,
        email: customer_email.clone(),
        phone: payload.customer.phone,
        address: payload.customer.address,
    };

    let order = build_order(
        &caterer_id,
        order_number,
        customer.clone(),
        EventDetails {
            event_date: day_start_millis(event_date),
            event_type: payload.event.event_type,
            venue: payload.event.venue,
            note: payload.event.note,
        },
        &quote,
        deposit,
        now,
    );

    let created = orders.create(order).await?;

    // Refresh the customer snapshot; a failure here must not undo the
    // booking
    let customers = CustomerRepository::new(state.db.clone());
    if let Err(e) = customers
        .upsert_by_email(Customer {
            id: None,
            name: customer.name,
            email: customer_email,
            phone: customer.phone,
            address: customer.address,
            last_order_at: now,
        })
        .await
    {
        tracing::warn!(error = %e, "Customer snapshot refresh failed");
    }

    tracing::info!(
        order = %created.order_number,
        caterer = %caterer_id,
        guests = created.guest_count,
        "Booking created"
    );

    Ok(ok(created))
}

// =============================================================================
// Feedback & contact
// =============================================================================

/// POST /api/public/caterers/:caterer_id/feedback
pub async fn submit_feedback(
    State(state): State<ServerState>,
    Path(caterer_id): Path<String>,
    Json(payload): Json<FeedbackCreate>,
) -> AppResult<Json<ApiResponse<bool>>> {
    resolve_caterer(&state, &caterer_id).await?;

    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_rating(payload.rating)?;
    validate_optional_text(&payload.comment, "comment", MAX_NOTE_LEN)?;

    FeedbackRepository::new(state.db.clone())
        .create(make_record_id("caterer", &caterer_id), payload)
        .await?;

    Ok(ok(true))
}

/// POST /api/public/caterers/:caterer_id/contact
pub async fn submit_contact(
    State(state): State<ServerState>,
    Path(caterer_id): Path<String>,
    Json(payload): Json<ContactCreate>,
) -> AppResult<Json<ApiResponse<bool>>> {
    resolve_caterer(&state, &caterer_id).await?;

    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.message, "message", MAX_NOTE_LEN)?;

    ContactRepository::new(state.db.clone())
        .create(make_record_id("caterer", &caterer_id), payload)
        .await?;

    Ok(ok(true))
}
