//! Repository Module
//!
//! CRUD operations for the SurrealDB tables. Record references between
//! tables are stored as `table:key` strings, so filter parameters are
//! always bound as `String`s.

// Tenant
pub mod caterer;

// Catalog
pub mod category;
pub mod event;
pub mod menu_item;

// Bookings
pub mod customer;
pub mod order;

// Inbox
pub mod contact;
pub mod feedback;

// Credential recovery
pub mod password_reset_otp;

// Re-exports
pub use caterer::CatererRepository;
pub use category::CategoryRepository;
pub use contact::ContactRepository;
pub use customer::CustomerRepository;
pub use event::EventRepository;
pub use feedback::FeedbackRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use password_reset_otp::PasswordResetOtpRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for shared::AppError {
    fn from(err: RepoError) -> Self {
        use shared::{AppError, ErrorCode};
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Strip a `table:` prefix from an id, if present
pub fn record_key<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Build a RecordId for a table from either `key` or `table:key`
pub fn make_record_id(table: &str, id: &str) -> RecordId {
    RecordId::from_table_key(table, record_key(table, id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
