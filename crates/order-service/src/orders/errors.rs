//! Order Errors

use tracing::error;

use microshop_runtime::ApiError;
use microshop_store::domain::orders::OrdersServiceError;

pub(crate) const INVALID_ORDER_PAYLOAD: &str = "Invalid order payload";
pub(crate) const FAILED_TO_CREATE_ORDER: &str = "Failed to create order";
pub(crate) const FAILED_TO_FETCH_ORDERS: &str = "Failed to fetch orders";
pub(crate) const FAILED_TO_FETCH_ORDER: &str = "Failed to fetch order";
pub(crate) const ORDER_NOT_FOUND: &str = "Order not found";

/// Map a store failure to the route's fixed message, logging the cause.
pub(crate) fn into_api_error(error: OrdersServiceError, message: &'static str) -> ApiError {
    match error {
        OrdersServiceError::NotFound => ApiError::not_found(ORDER_NOT_FOUND),
        OrdersServiceError::Sql(source) => {
            error!("{}: {source}", message.to_lowercase());

            ApiError::internal(message)
        }
    }
}
