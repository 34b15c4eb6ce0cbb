//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use microshop_runtime::{HttpMetrics, request::RequestLogging};

use crate::{healthcheck, orders, state::State};

pub(crate) fn app_router(state: Arc<State>, metrics: &HttpMetrics) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(inject(state))
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics.endpoint()))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(Router::with_path("{id}").get(orders::get::handler)),
        )
}

/// Service-level hoops also see requests that match no route.
pub(crate) fn service(
    state: Arc<State>,
    metrics: &HttpMetrics,
    request_logging: RequestLogging,
) -> Service {
    Service::new(app_router(state, metrics))
        .hoop(request_logging)
        .hoop(metrics.recorder())
}
