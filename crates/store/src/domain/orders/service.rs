//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{NewOrder, Order, OrderId},
        repository::PgOrdersRepository,
    },
};

/// [`OrdersService`] backed by the `orders` table.
#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    /// Wrap a connected database handle.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let created = self.repository.create_order(self.db.pool(), order).await?;

        debug!(order_id = created.id, "order created");

        Ok(created)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.repository.list_orders(self.db.pool()).await?)
    }

    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError> {
        Ok(self.repository.get_order(self.db.pool(), order).await?)
    }
}

/// Order persistence operations used by the HTTP handlers.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Insert a new order with status `pending`, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::Sql`] on any constraint or connectivity failure.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Every order, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::Sql`] when the query fails.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// A single order by id.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::NotFound`] when no row has this id.
    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError>;
}
