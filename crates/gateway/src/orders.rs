//! Order routes, relayed to the Order Service.

use std::sync::Arc;

use salvo::prelude::*;

use microshop_runtime::{ApiError, extensions::DepotExt as _};

use crate::{
    relay::{self, Relayed},
    state::State,
};

const FAILED_TO_FETCH_ORDERS: &str = "Failed to fetch orders";
const FAILED_TO_CREATE_ORDER: &str = "Failed to create order";

/// List Orders Handler
#[handler]
pub(crate) async fn index(depot: &mut Depot) -> Result<Relayed, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>(FAILED_TO_FETCH_ORDERS)?;

    relay::fetch(state.orders.as_ref(), FAILED_TO_FETCH_ORDERS).await
}

/// Create Order Handler
#[handler]
pub(crate) async fn create(req: &mut Request, depot: &mut Depot) -> Result<Relayed, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>(FAILED_TO_CREATE_ORDER)?;

    relay::submit(state.orders.as_ref(), req, FAILED_TO_CREATE_ORDER).await
}
