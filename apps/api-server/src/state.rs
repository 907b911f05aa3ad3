//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostService;
use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, InMemoryPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

/// Reasons the server refuses to start.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to database: {0}")]
    Database(String),

    #[error("failed to run migrations: {0}")]
    Migration(String),

    #[error("DATABASE_URL is set but the server was built without the postgres feature")]
    PostgresDisabled,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is an error: the server
    /// must not come up against a broken store.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        let posts: Arc<dyn PostRepository> = match &config.database {
            Some(db_config) => connect_postgres(db_config, config.run_migrations).await?,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(posts))
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(posts),
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(
    config: &DatabaseConfig,
    run_migrations: bool,
) -> Result<Arc<dyn PostRepository>, StartupError> {
    use migration::MigratorTrait;
    use quill_infra::PostgresPostRepository;

    let conn = quill_infra::database::connect(config)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if run_migrations {
        migration::Migrator::up(&conn, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        tracing::info!("Migrations applied");
    }

    Ok(Arc::new(PostgresPostRepository::new(conn)))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(
    _config: &DatabaseConfig,
    _run_migrations: bool,
) -> Result<Arc<dyn PostRepository>, StartupError> {
    Err(StartupError::PostgresDisabled)
}
