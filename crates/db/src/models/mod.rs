//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for request bodies, plus the validated
//!   insert struct it converts into
//!
//! Rust field names follow the English column names; JSON keys keep the
//! Spanish names clients already depend on.

pub mod assignment;
pub mod mission;
pub mod ninja;
pub mod report;
