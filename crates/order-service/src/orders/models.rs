//! Order request and response bodies

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use microshop_store::domain::orders::models::{NewOrder, Order, OrderId};

/// An integer given either as a JSON number or as a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerOrString {
    Integer(i32),
    Text(String),
}

fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntegerOrString::deserialize(deserializer)? {
        IntegerOrString::Integer(value) => Ok(value),
        IntegerOrString::Text(text) => text
            .trim()
            .parse::<i32>()
            .map_err(|source| D::Error::custom(format!("invalid integer {text:?}: {source}"))),
    }
}

/// Create Order Request
///
/// `quantity` accepts a JSON integer or a numeric string; `total_price`
/// accepts a JSON number or a decimal string.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreateOrderRequest {
    pub product_id: String,
    pub product_name: String,

    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub quantity: i32,
    pub total_price: Decimal,
    pub customer_email: String,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            product_id: request.product_id,
            product_name: request.product_name,
            quantity: request.quantity,
            total_price: request.total_price,
            customer_email: request.customer_email,
        }
    }
}

/// A stored order as returned to clients.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub(crate) struct OrderResponse {
    pub id: OrderId,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,

    /// Serialized as a decimal string, e.g. `"59.98"`
    pub total_price: Decimal,
    pub customer_email: String,
    pub status: String,

    /// RFC 3339
    pub created_at: Timestamp,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id,
            product_id: order.product_id,
            product_name: order.product_name,
            quantity: order.quantity,
            total_price: order.total_price,
            customer_email: order.customer_email,
            status: order.status,
            created_at: order.created_at,
        }
    }
}
