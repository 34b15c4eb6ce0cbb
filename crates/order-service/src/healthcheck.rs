//! Order Service Healthcheck Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::error;

use microshop_runtime::{ApiError, extensions::DepotExt as _};

use crate::state::State;

const SERVICE_NAME: &str = "order-service";

/// Healthy response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthyResponse {
    pub status: String,
    pub service: String,
    pub database: String,
}

/// Unhealthy response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Outcome of the database ping.
#[derive(Debug)]
pub(crate) enum Health {
    Healthy,
    Unhealthy(String),
}

impl Scribe for Health {
    fn render(self, res: &mut Response) {
        match self {
            Self::Healthy => res.render(Json(HealthyResponse {
                status: "healthy".to_string(),
                service: SERVICE_NAME.to_string(),
                database: "connected".to_string(),
            })),
            Self::Unhealthy(error) => {
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                res.render(Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error,
                }));
            }
        }
    }
}

/// Healthcheck handler
///
/// Probes the database and reports whether it answered.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Health, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>("Health check failed")?;

    match state.app.database.ping().await {
        Ok(()) => Ok(Health::Healthy),
        Err(source) => {
            error!("database health check failed: {source}");

            Ok(Health::Unhealthy(source.to_string()))
        }
    }
}
