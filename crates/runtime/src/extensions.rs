//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub trait DepotExt {
    /// Obtain injected state, or a 500 carrying `message` when it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::internal`] when no value of type `T` was injected.
    fn obtain_or_500<T: Any + Send + Sync>(&self, message: &'static str)
    -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(
        &self,
        message: &'static str,
    ) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| {
            tracing::error!("request state missing from depot");

            ApiError::internal(message)
        })
    }
}
