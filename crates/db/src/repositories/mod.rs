//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept any `PgExecutor` as the first argument, so callers can pass
//! either `&PgPool` or `&mut *tx` for work that must share a transaction.

pub mod assignment_repo;
pub mod mission_repo;
pub mod ninja_repo;
pub mod report_repo;

pub use assignment_repo::AssignmentRepo;
pub use mission_repo::MissionRepo;
pub use ninja_repo::NinjaRepo;
pub use report_repo::ReportRepo;
