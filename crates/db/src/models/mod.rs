//! Row types returned by `sqlx::query_as`.

pub mod employee;
