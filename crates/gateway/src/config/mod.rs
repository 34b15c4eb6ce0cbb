//! Gateway configuration

use clap::Parser;
use microshop_runtime::logging::LoggingConfig;

use crate::config::{server::ServerRuntimeConfig, upstream::UpstreamConfig};

pub(crate) mod server;
pub(crate) mod upstream;

/// API gateway configuration
#[derive(Debug, Parser)]
#[command(name = "api-gateway", about = "Microshop API Gateway", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Upstream service locations.
    #[command(flatten)]
    pub upstream: UpstreamConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
