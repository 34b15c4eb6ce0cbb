//! List Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use microshop_runtime::{ApiError, extensions::DepotExt as _};

use crate::{
    orders::{
        errors::{FAILED_TO_FETCH_ORDERS, into_api_error},
        models::OrderResponse,
    },
    state::State,
};

/// List Orders Handler
///
/// Returns every order, newest first.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>(FAILED_TO_FETCH_ORDERS)?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .map_err(|error| into_api_error(error, FAILED_TO_FETCH_ORDERS))?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
