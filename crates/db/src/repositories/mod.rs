//! Repository layer.
//!
//! Each repository holds a `PgPool` handle and implements the matching
//! storage port from `roster_core::repository`.

pub mod employee_repo;

pub use employee_repo::EmployeeRepo;
