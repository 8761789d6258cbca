use std::sync::Arc;

use roster_core::service::EmployeeService;
use roster_db::repositories::EmployeeRepo;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and the service are both `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: roster_db::DbPool,
    /// Employee business rules, wired to the PostgreSQL repository.
    pub employees: EmployeeService,
}

impl AppState {
    /// Wire the service layer on top of `pool`.
    pub fn new(pool: roster_db::DbPool) -> Self {
        let repo = Arc::new(EmployeeRepo::new(pool.clone()));
        Self {
            pool,
            employees: EmployeeService::new(repo),
        }
    }
}
