//! Order persistence: schema, repository, and the orders service.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
