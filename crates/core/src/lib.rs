//! Domain layer for the roster service.
//!
//! Holds the employee entity and its wire representation, the repository
//! port that storage backends implement, and the service that enforces the
//! employee business rules.

pub mod employee;
pub mod error;
pub mod repository;
pub mod service;
pub mod types;
