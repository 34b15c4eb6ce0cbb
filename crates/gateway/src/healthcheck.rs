//! API Gateway Healthcheck Handler

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Time the check was answered
    pub timestamp: Timestamp,
}

/// Healthcheck handler
///
/// Answers without consulting any upstream.
#[handler]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "api-gateway".to_string(),
        timestamp: Timestamp::now(),
    })
}
