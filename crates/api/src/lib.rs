//! Konoha roster API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes) so
//! integration tests and the binary entrypoint can both access them.
//!
//! `cargo test` runs the unit tests and `tests/error_handling.rs`. The HTTP
//! suites under `tests/` need PostgreSQL reachable through `DATABASE_URL`
//! and only compile with `cargo test --features postgres-tests`.

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
