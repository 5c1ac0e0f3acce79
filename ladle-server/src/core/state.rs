use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::EmailService;
use shared::AppError;

/// Server state - shared handles for all services
///
/// Cloned per request; every field is either `Clone`-cheap or behind an
/// `Arc`.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | db | Surreal<Db> | Embedded database |
/// | jwt_service | Arc<JwtService> | Token issuance / verification |
/// | email | Arc<EmailService> | Transactional email transport |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT service
    pub jwt_service: Arc<JwtService>,
    /// Email transport
    pub email: Arc<EmailService>,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// 1. Ensure the work directory structure exists
    /// 2. Open the database at `work_dir/database/ladle.db`
    /// 3. Build the JWT and email services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("ladle.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let email = Arc::new(EmailService::from_env(config).await);

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
            email,
        })
    }

    /// Initialize against an in-memory database (tests, local experiments)
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new_in_memory().await?;
        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
            email: Arc::new(EmailService::disabled()),
        })
    }

    /// Get the database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
