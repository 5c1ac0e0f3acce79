//! Shared types for the Ladle catering platform
//!
//! Cross-cutting types used by the server and by API clients:
//!
//! - [`error`] - unified error codes and the application error type
//! - [`response`] - the `{ success, data, message }` API envelope
//! - [`util`] - small helpers (time, email normalization)

pub mod error;
pub mod response;
pub mod util;

pub use error::{AppError, ErrorCode};
pub use response::ApiResponse;
