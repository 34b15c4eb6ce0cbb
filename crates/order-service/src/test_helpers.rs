//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use microshop_store::{
    context::AppContext,
    database::MockDatabaseHealth,
    domain::orders::{
        MockOrdersService,
        models::{DEFAULT_STATUS, Order, OrderId},
    },
};

use crate::state::State;

/// An order as the store would return it, created at 2024-06-01T12:00:00Z.
pub(crate) fn make_order(id: OrderId) -> Order {
    Order {
        id,
        product_id: "p1".to_string(),
        product_name: "Widget".to_string(),
        quantity: 2,
        total_price: Decimal::new(5998, 2),
        customer_email: "a@b.co".to_string(),
        status: DEFAULT_STATUS.to_string(),
        created_at: Timestamp::from_second(1_717_243_200).expect("valid timestamp"),
    }
}

pub(crate) fn healthy_database() -> MockDatabaseHealth {
    let mut database = MockDatabaseHealth::new();

    database.expect_ping().returning(|| Ok(()));

    database
}

fn strict_database_mock() -> MockDatabaseHealth {
    let mut database = MockDatabaseHealth::new();

    database.expect_ping().never();

    database
}

pub(crate) fn state_with(orders: MockOrdersService, database: MockDatabaseHealth) -> Arc<State> {
    State::from_app_context(AppContext {
        orders: Arc::new(orders),
        database: Arc::new(database),
    })
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(orders, strict_database_mock())))
            .push(route),
    )
}
