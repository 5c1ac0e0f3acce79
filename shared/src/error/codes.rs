//! Unified error codes for the Ladle platform
//!
//! Error codes are shared between the server and frontend clients.
//! They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Credential recovery (OTP) errors
//! - 3xxx: Caterer / tenant errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as `u16` on the wire for efficient serialization and
/// cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,

    // ==================== 2xxx: Credential recovery ====================
    /// Too many OTP requests for this email
    OtpRateLimited = 2001,
    /// OTP code does not match any unused record
    OtpInvalid = 2002,
    /// OTP code has expired
    OtpExpired = 2003,
    /// OTP must be verified before the password can be reset
    OtpNotVerified = 2004,
    /// New password is shorter than the minimum length
    PasswordTooShort = 2005,
    /// New password and confirmation do not match
    PasswordMismatch = 2006,

    // ==================== 3xxx: Caterer ====================
    /// Caterer not found
    CatererNotFound = 3001,
    /// Caterer account is inactive
    CatererInactive = 3002,
    /// Email is already registered
    EmailAlreadyRegistered = 3003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Status change is not a legal transition
    OrderIllegalTransition = 4002,
    /// Order has no items
    OrderEmpty = 4003,

    // ==================== 6xxx: Catalog ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Category not found
    CategoryNotFound = 6101,
    /// Event not found
    EventNotFound = 6201,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Transactional email could not be delivered
    EmailDeliveryFailed = 9003,
}

impl ErrorCode {
    /// Default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::AccountDisabled => "Account is disabled",

            Self::OtpRateLimited => "Too many OTP requests, try again later",
            Self::OtpInvalid => "Invalid OTP code",
            Self::OtpExpired => "OTP code has expired, request a new one",
            Self::OtpNotVerified => "OTP must be verified first",
            Self::PasswordTooShort => "Password must be at least 8 characters",
            Self::PasswordMismatch => "Passwords do not match",

            Self::CatererNotFound => "Caterer not found",
            Self::CatererInactive => "Caterer not found",
            Self::EmailAlreadyRegistered => "Email is already registered",

            Self::OrderNotFound => "Order not found",
            Self::OrderIllegalTransition => "Illegal order status transition",
            Self::OrderEmpty => "At least one item is required",

            Self::MenuItemNotFound => "Menu item not found",
            Self::CategoryNotFound => "Category not found",
            Self::EventNotFound => "Event not found",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::EmailDeliveryFailed => "Failed to send email",
        }
    }

    /// HTTP status code this error maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::OrderEmpty
            | Self::OtpInvalid
            | Self::OtpExpired
            | Self::OtpNotVerified
            | Self::PasswordTooShort
            | Self::PasswordMismatch => StatusCode::BAD_REQUEST,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            Self::AccountDisabled => StatusCode::FORBIDDEN,

            Self::NotFound
            | Self::CatererNotFound
            | Self::CatererInactive
            | Self::OrderNotFound
            | Self::MenuItemNotFound
            | Self::CategoryNotFound
            | Self::EventNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::EmailAlreadyRegistered => StatusCode::CONFLICT,

            Self::OrderIllegalTransition => StatusCode::UNPROCESSABLE_ENTITY,

            Self::OtpRateLimited => StatusCode::TOO_MANY_REQUESTS,

            Self::Unknown
            | Self::InternalError
            | Self::DatabaseError
            | Self::EmailDeliveryFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1005 => Self::AccountDisabled,
            2001 => Self::OtpRateLimited,
            2002 => Self::OtpInvalid,
            2003 => Self::OtpExpired,
            2004 => Self::OtpNotVerified,
            2005 => Self::PasswordTooShort,
            2006 => Self::PasswordMismatch,
            3001 => Self::CatererNotFound,
            3002 => Self::CatererInactive,
            3003 => Self::EmailAlreadyRegistered,
            4001 => Self::OrderNotFound,
            4002 => Self::OrderIllegalTransition,
            4003 => Self::OrderEmpty,
            6001 => Self::MenuItemNotFound,
            6101 => Self::CategoryNotFound,
            6201 => Self::EventNotFound,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::EmailDeliveryFailed,
            other => return Err(format!("Unknown error code: {other}")),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        let codes = [
            ErrorCode::ValidationFailed,
            ErrorCode::OtpRateLimited,
            ErrorCode::OrderIllegalTransition,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            ErrorCode::OtpRateLimited.http_status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ErrorCode::CatererInactive.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::OrderIllegalTransition.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
