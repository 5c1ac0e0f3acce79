//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`auth`] - register / login / me
//! - [`password_reset`] - OTP credential recovery
//! - [`profile`] - business profile and pricing configuration
//! - [`categories`] - menu category management
//! - [`menu_items`] - menu item management
//! - [`events`] - portfolio event management
//! - [`orders`] - order list / detail / status timeline
//! - [`feedback`] - feedback inbox
//! - [`contact`] - contact message inbox
//! - [`storefront`] - the public customer-facing surface (menu, quote,
//!   availability, booking, feedback, contact)

pub mod auth;
pub mod categories;
pub mod contact;
pub mod events;
pub mod feedback;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod password_reset;
pub mod profile;
pub mod storefront;

use axum::{Router, middleware};
use surrealdb::RecordId;

use crate::auth::{CurrentCaterer, require_auth};
use crate::core::ServerState;
use crate::db::repository::make_record_id;
use shared::{AppError, error::AppResult};

// Re-export common helpers for handlers
pub use crate::utils::{ok, ok_with_message};

/// Assemble the routed application with auth applied
///
/// `require_auth` sits at router level and skips public routes itself.
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(health::router())
        .merge(auth::router())
        .merge(password_reset::router())
        .merge(profile::router())
        // Catalog APIs
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(events::router())
        // Booking APIs
        .merge(orders::router())
        // Inbox APIs
        .merge(feedback::router())
        .merge(contact::router())
        // Public storefront
        .merge(storefront::router())
}

/// Scope check: a caterer-owned resource is invisible to other tenants
///
/// Reports `NotFound` rather than `Forbidden` so existence does not leak
/// across tenants.
pub(crate) fn ensure_owned_by(owner: &RecordId, caterer: &CurrentCaterer) -> AppResult<()> {
    let expected = make_record_id("caterer", &caterer.id);
    if *owner != expected {
        return Err(AppError::not_found("Resource"));
    }
    Ok(())
}
