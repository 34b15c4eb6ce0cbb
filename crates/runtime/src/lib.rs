//! Shared runtime pieces for the microshop services.
//!
//! Both the API gateway and the order service are built from the same
//! parts: structured logging, a Prometheus registry with request metrics,
//! request logging, JSON error bodies, and graceful shutdown.

pub mod errors;
pub mod extensions;
pub mod logging;
pub mod metrics;
pub mod request;
pub mod server;

pub use errors::ApiError;
pub use metrics::{HttpMetrics, MetricsError};
pub use server::{ServeError, serve};
