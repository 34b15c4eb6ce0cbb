//! Shared test infrastructure for store integration tests.

mod db;

pub(crate) use context::TestContext;
pub(crate) use db::TestDb;
