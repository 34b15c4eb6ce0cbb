//! Upstream Config

use clap::Args;

/// Upstream service base URLs.
#[derive(Debug, Args)]
pub struct UpstreamConfig {
    /// Product Service base URL
    #[arg(long, env = "PRODUCT_SERVICE_URL", default_value = "http://localhost:8000")]
    pub product_service_url: String,

    /// Order Service base URL
    #[arg(long, env = "ORDER_SERVICE_URL", default_value = "http://localhost:3001")]
    pub order_service_url: String,
}
