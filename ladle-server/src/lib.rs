//! Ladle Server - multi-tenant catering management backend
//!
//! # Architecture overview
//!
//! Caterers manage their catalog and orders through authenticated APIs;
//! the public storefront quotes, checks availability and books.
//!
//! - **HTTP API** (`api`): RESTful routes, one module per resource
//! - **Database** (`db`): embedded SurrealDB storage + repositories
//! - **Auth** (`auth`): JWT + Argon2 authentication
//! - **Pricing** (`pricing`): quote computation with tiered discounts
//! - **Orders** (`orders`): order numbers, status timeline, booking assembly
//! - **Availability** (`availability`): per-day booking cap checks
//! - **OTP** (`otp`): password-reset code issue/verify/reset
//!
//! # Module structure
//!
//! ```text
//! ladle-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, password hashing, middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer (models + repositories)
//! ├── pricing/       # quote engine
//! ├── orders/        # order lifecycle
//! ├── services/      # email transport
//! └── utils/         # logger, time, validation
//! ```

pub mod api;
pub mod auth;
pub mod availability;
pub mod core;
pub mod db;
pub mod orders;
pub mod otp;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentCaterer, JwtService};
pub use core::{Config, Server, ServerState};
pub use shared::{ApiResponse, AppError, ErrorCode};
pub use shared::error::AppResult;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment: dotenv and logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}

pub fn print_banner() {
    println!(
        r#"
    __          ____
   / /   ____ _/ __ \___
  / /   / __ `/ / / / _ \
 / /___/ /_/ / /_/ /  __/
/_____/\__,_/_____/\___/
    "#
    );
}
