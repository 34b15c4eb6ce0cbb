//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    prelude::*,
};

use microshop_runtime::{HttpMetrics, request::RequestLogging};

use crate::{healthcheck, orders, products, state::State};

pub(crate) fn app_router(state: Arc<State>, metrics: &HttpMetrics) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(inject(state))
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics.endpoint()))
        .push(
            Router::with_path("api/products")
                .get(products::index)
                .post(products::create),
        )
        .push(
            Router::with_path("api/orders")
                .get(orders::index)
                .post(orders::create),
        )
}

fn cors() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler()
}

/// Service-level hoops also see preflights and requests that match no route.
pub(crate) fn service(
    state: Arc<State>,
    metrics: &HttpMetrics,
    request_logging: RequestLogging,
) -> Service {
    Service::new(app_router(state, metrics))
        .hoop(cors())
        .hoop(request_logging)
        .hoop(metrics.recorder())
}
