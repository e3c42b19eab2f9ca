//! Shared test infrastructure for integration tests.

pub mod fixtures;
pub mod repository;
