//! Order models

use jiff::Timestamp;
use rust_decimal::Decimal;

/// Database-assigned order identifier.
pub type OrderId = i32;

/// Status every new order starts in.
pub const DEFAULT_STATUS: &str = "pending";

/// Persisted order row.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Serial primary key.
    pub id: OrderId,

    /// Catalogue id of the ordered product.
    pub product_id: String,

    /// Product name at the time of ordering.
    pub product_name: String,

    /// Units ordered.
    pub quantity: i32,

    /// Order total, two decimal places.
    pub total_price: Decimal,

    /// Customer contact address.
    pub customer_email: String,

    /// Lifecycle status, [`DEFAULT_STATUS`] on insert.
    pub status: String,

    /// Insert time, assigned by the database.
    pub created_at: Timestamp,
}

/// Order fields supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Catalogue id of the ordered product.
    pub product_id: String,

    /// Product name at the time of ordering.
    pub product_name: String,

    /// Units ordered.
    pub quantity: i32,

    /// Order total. Rounded to two decimal places on insert.
    pub total_price: Decimal,

    /// Customer contact address.
    pub customer_email: String,
}
