//! Authentication middleware
//!
//! Validates the `Authorization: Bearer <token>` header and injects
//! [`CurrentCaterer`] into request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentCaterer, JwtService};
use crate::core::ServerState;
use shared::AppError;

/// Whether a path is reachable without a token
///
/// - `/api/auth/login`, `/api/auth/register` - credential entry points
/// - `/api/auth/forgot-password/*` - OTP recovery flow
/// - `/api/public/*` - the customer-facing storefront
/// - `/api/health` - liveness probe
fn is_public_api_route(path: &str) -> bool {
    path == "/api/auth/login"
        || path == "/api/auth/register"
        || path.starts_with("/api/auth/forgot-password/")
        || path.starts_with("/api/public/")
        || path == "/api/health"
}

/// Auth middleware - requires a valid caterer token
///
/// # Errors
///
/// | Condition | HTTP status |
/// |-----------|-------------|
/// | No Authorization header | 401 |
/// | Expired token | 401 |
/// | Invalid token | 401 |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // CORS preflight skips auth
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes skip auth (they 404 normally)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Missing authorization header");
            return Err(AppError::not_authenticated());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let caterer = CurrentCaterer::from(claims);
            req.extensions_mut().insert(caterer);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "Token validation failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}
