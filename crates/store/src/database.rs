//! Database connection management

use std::fmt;

use async_trait::async_trait;
use mockall::automock;
use sqlx::{
    PgPool,
    migrate::{MigrateError, Migrator},
    postgres::{PgConnectOptions, PgPoolOptions},
    query,
};

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Discrete `PostgreSQL` connection settings.
#[derive(Clone)]
pub struct ConnectionSettings {
    /// Server host name or address.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Database name.
    pub database: String,

    /// Login role.
    pub username: String,

    /// Login password. Redacted from `Debug` output.
    pub password: String,

    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl ConnectionSettings {
    /// Build driver connect options from the settings.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(settings: &ConnectionSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(settings.connect_options())
        .await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Shared handle to a migrated connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Wrap an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for running queries.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DatabaseHealth for Db {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }
}

/// Liveness check used by the health endpoint.
#[automock]
#[async_trait]
pub trait DatabaseHealth: Send + Sync {
    /// Round-trip a trivial query to prove connectivity.
    ///
    /// # Errors
    ///
    /// Returns the driver error when the database does not answer.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
