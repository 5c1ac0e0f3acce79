//! Public storefront API module
//!
//! The customer-facing surface. Everything here is reachable without a
//! token and scoped to one caterer by path.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/public/caterers/{caterer_id}", storefront_routes())
}

fn storefront_routes() -> Router<ServerState> {
    Router::new()
        .route("/menu", get(handler::get_menu))
        .route("/events", get(handler::list_events))
        .route("/quote", post(handler::quote))
        .route("/availability", get(handler::availability))
        .route("/bookings", post(handler::create_booking))
        .route("/feedback", post(handler::submit_feedback))
        .route("/contact", post(handler::submit_contact))
}
