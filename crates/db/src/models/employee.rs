//! Row model for the `employees` table.

use roster_core::employee::Employee;
use roster_core::types::{DbId, Salary};
use sqlx::FromRow;

/// A row from the `employees` table.
///
/// `created_at` / `updated_at` are maintained by the database and are not
/// selected.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub salary: Salary,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            email: row.email,
            salary: row.salary,
        }
    }
}
