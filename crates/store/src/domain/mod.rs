//! Microshop Domain Concerns

pub mod orders;
