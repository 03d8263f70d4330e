//! Domain rules for the Konoha roster service.
//!
//! This crate has no database or HTTP dependencies. Everything here works on
//! plain values handed in by the `db` and `api` crates.

pub mod abilities;
pub mod error;
pub mod rank;
pub mod report;
pub mod types;
pub mod validation;
