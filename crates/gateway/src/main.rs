//! Microshop API Gateway

use std::{process, sync::Arc};

use reqwest::Client;
use tracing::{error, info};

use microshop_runtime::{HttpMetrics, logging, request::RequestLogging};

use crate::{config::ServerConfig, state::State, upstream::HttpUpstream};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod healthcheck;
mod orders;
mod products;
mod relay;
mod router;
mod state;
#[cfg(test)]
mod test_helpers;
mod upstream;

const REQUEST_DURATION: &str = "http_request_duration_seconds";
const REQUEST_DURATION_HELP: &str = "Duration of HTTP requests in seconds";

/// API gateway entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(logging_error) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {logging_error}");
        }

        process::exit(1);
    }

    let metrics = match HttpMetrics::with_request_duration(REQUEST_DURATION, REQUEST_DURATION_HELP)
    {
        Ok(metrics) => metrics,
        Err(metrics_error) => {
            error!("failed to initialize metrics: {metrics_error}");

            process::exit(1);
        }
    };

    let http = match Client::builder().build() {
        Ok(http) => http,
        Err(client_error) => {
            error!("failed to build upstream http client: {client_error}");

            process::exit(1);
        }
    };

    let products = HttpUpstream::new(http.clone(), &config.upstream.product_service_url, "products");
    let orders = HttpUpstream::new(http, &config.upstream.order_service_url, "orders");

    info!(products = products.url(), orders = orders.url(), "relaying to upstreams");

    let service = router::service(
        State::new(Arc::new(products), Arc::new(orders)),
        &metrics,
        RequestLogging::new(config.logging.slow_request_threshold()),
    );

    if let Err(serve_error) =
        microshop_runtime::serve("api-gateway", &config.socket_addr(), service).await
    {
        error!("{serve_error}");

        process::exit(1);
    }
}
