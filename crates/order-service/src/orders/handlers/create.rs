//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::CONTENT_TYPE, prelude::*};
use serde_json::{Map, Value};
use tracing::{error, warn};

use microshop_runtime::{ApiError, extensions::DepotExt as _};

use crate::{
    orders::{
        errors::{FAILED_TO_CREATE_ORDER, INVALID_ORDER_PAYLOAD, into_api_error},
        models::{CreateOrderRequest, OrderResponse},
    },
    state::State,
};

/// Create Order Handler
///
/// Stores the order with status `pending` and answers 201 with the row.
/// Only an unparseable JSON body is a 400; a body that parses but cannot
/// become an order fails like any other insert.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>(FAILED_TO_CREATE_ORDER)?;

    let payload = json_body(req).await?;

    let request = serde_json::from_value::<CreateOrderRequest>(payload).map_err(|source| {
        error!("failed to create order: {source}");

        ApiError::internal(FAILED_TO_CREATE_ORDER)
    })?;

    let order = state
        .app
        .orders
        .create_order(request.into())
        .await
        .map_err(|error| into_api_error(error, FAILED_TO_CREATE_ORDER))?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

/// The request body as JSON, or an empty object when the body is empty or not
/// declared as JSON.
async fn json_body(req: &mut Request) -> Result<Value, ApiError> {
    let declared_json = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("json"));

    let payload = req.payload().await.map_err(|source| {
        warn!("could not read order payload: {source}");

        ApiError::bad_request(INVALID_ORDER_PAYLOAD)
    })?;

    if !declared_json || payload.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    match serde_json::from_slice::<Value>(payload) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(Value::Array(_)) => Ok(Value::Object(Map::new())),
        Ok(_) => {
            warn!("rejected order payload: not a JSON object or array");

            Err(ApiError::bad_request(INVALID_ORDER_PAYLOAD))
        }
        Err(source) => {
            warn!("rejected order payload: {source}");

            Err(ApiError::bad_request(INVALID_ORDER_PAYLOAD))
        }
    }
}
