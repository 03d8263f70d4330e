//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `konoha_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod assignment;
pub mod export;
pub mod mission;
pub mod ninja;
pub mod pages;
pub mod report;
