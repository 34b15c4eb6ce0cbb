//! Microshop Order Service

use std::process;

use tracing::error;

use microshop_runtime::{HttpMetrics, logging, request::RequestLogging};
use microshop_store::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod healthcheck;
mod orders;
mod router;
mod state;
#[cfg(test)]
mod test_helpers;

const REQUESTS_TOTAL: &str = "order_service_requests_total";
const REQUESTS_TOTAL_HELP: &str = "Total number of requests";

/// Order service entry point
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

    let metrics = match HttpMetrics::with_request_counter(REQUESTS_TOTAL, REQUESTS_TOTAL_HELP) {
        Ok(metrics) => metrics,
        Err(metrics_error) => {
            error!("failed to initialize metrics: {metrics_error}");

            process::exit(1);
        }
    };

    let settings = config.database.connection_settings();

    let app = match AppContext::connect(&settings).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let service = router::service(
        State::from_app_context(app),
        &metrics,
        RequestLogging::new(config.logging.slow_request_threshold()),
    );

    if let Err(serve_error) =
        microshop_runtime::serve("order-service", &config.socket_addr(), service).await
    {
        error!("{serve_error}");

        process::exit(1);
    }
}
