//! Order service configuration

use clap::Parser;
use microshop_runtime::logging::LoggingConfig;

use crate::config::{db::DatabaseConfig, server::ServerRuntimeConfig};

pub(crate) mod db;
pub(crate) mod server;

/// Order service configuration
#[derive(Debug, Parser)]
#[command(name = "order-service", about = "Microshop Order Service", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Orders database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine.
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
