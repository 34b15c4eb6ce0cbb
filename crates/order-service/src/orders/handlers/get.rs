//! Get Order Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::error;

use microshop_runtime::{ApiError, extensions::DepotExt as _};
use microshop_store::domain::orders::models::OrderId;

use crate::{
    orders::{
        errors::{FAILED_TO_FETCH_ORDER, into_api_error},
        models::OrderResponse,
    },
    state::State,
};

/// Get Order Handler
///
/// Ids that do not fit the integer id column fail like a query error.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>(FAILED_TO_FETCH_ORDER)?;

    let Some(id) = req.param::<OrderId>("id") else {
        let raw = req.param::<String>("id").unwrap_or_default();

        error!(id = %raw, "failed to fetch order: id is not a valid integer");

        return Err(ApiError::internal(FAILED_TO_FETCH_ORDER));
    };

    let order = state
        .app
        .orders
        .get_order(id)
        .await
        .map_err(|error| into_api_error(error, FAILED_TO_FETCH_ORDER))?;

    Ok(Json(order.into()))
}
