//! Storage port for employees.
//!
//! The service depends only on this trait; `roster-db` provides the
//! PostgreSQL implementation.

use async_trait::async_trait;

use crate::employee::Employee;
use crate::error::CoreError;
use crate::types::DbId;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Look up a single employee. No side effects.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Employee>, CoreError>;

    /// All employees with the given email. Uniqueness is not assumed here.
    async fn find_by_email(&self, email: &str) -> Result<Vec<Employee>, CoreError>;

    /// Insert when `employee.id` is `None`, otherwise update the row with
    /// that id. Returns the persisted entity with its id populated.
    async fn save(&self, employee: &Employee) -> Result<Employee, CoreError>;

    /// Remove the row. Callers confirm existence first.
    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, CoreError>;
}
