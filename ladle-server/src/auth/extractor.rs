//! Axum extractor for the authenticated caterer
//!
//! ```ignore
//! async fn handler(caterer: CurrentCaterer) -> AppResult<Json<...>> {
//!     // caterer.id is "caterer:xyz"
//! }
//! ```

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::auth::CurrentCaterer;
use shared::AppError;

impl<S> FromRequestParts<S> for CurrentCaterer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentCaterer>()
            .cloned()
            .ok_or_else(AppError::not_authenticated)
    }
}
