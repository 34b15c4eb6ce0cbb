//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

/// Failures surfaced by [`OrdersService`](super::OrdersService).
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// No order has the requested id.
    #[error("order not found")]
    NotFound,

    /// Any other driver or constraint failure.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
