//! Profile API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/profile", profile_routes())
}

fn profile_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_profile).put(handler::update_profile))
        .route("/pricing", put(handler::update_pricing))
}
