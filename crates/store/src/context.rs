//! Application context

use std::{fmt, sync::Arc};

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, ConnectionSettings, DatabaseHealth, Db},
    domain::orders::{OrdersService, PgOrdersService},
};

/// Startup failures, fatal for the order service.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The pool could not open a connection.
    #[error("failed to connect to database: {0}")]
    Database(#[source] sqlx::Error),

    /// A schema migration failed to apply.
    #[error("failed to apply schema migrations: {0}")]
    Migration(#[source] MigrateError),
}

/// Services shared by the order service handlers.
#[derive(Clone)]
pub struct AppContext {
    /// Order persistence.
    pub orders: Arc<dyn OrdersService>,

    /// Connectivity check for `/health`.
    pub database: Arc<dyn DatabaseHealth>,
}

impl AppContext {
    /// Connect, apply migrations, and wire the `PostgreSQL`-backed services.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or a migration fails.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(settings)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        info!(
            host = %settings.host,
            database = %settings.database,
            "database schema initialised"
        );

        let db = Db::new(pool);

        Ok(Self {
            orders: Arc::new(PgOrdersService::new(db.clone())),
            database: Arc::new(db),
        })
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
