//! Repository for the `employees` table.

use async_trait::async_trait;
use roster_core::employee::{Employee, ENTITY_NAME};
use roster_core::error::CoreError;
use roster_core::repository::EmployeeRepository;
use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::EmployeeRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, salary";

/// Unique constraint guarding the email column.
const EMAIL_CONSTRAINT: &str = "uq_employees_email";

/// PostgreSQL-backed [`EmployeeRepository`].
#[derive(Clone)]
pub struct EmployeeRepo {
    pool: PgPool,
}

impl EmployeeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, employee: &Employee) -> Result<EmployeeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (name, email, salary) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(employee.salary)
            .fetch_one(&self.pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    async fn update(
        &self,
        id: DbId,
        employee: &Employee,
    ) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET \
                name = $2, \
                email = $3, \
                salary = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(employee.salary)
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Employee>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(to_core_error)?;
        Ok(row.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Employee>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE email = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(to_core_error)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, CoreError> {
        let row = match employee.id {
            None => self.insert(employee).await.map_err(to_core_error)?,
            Some(id) => self
                .update(id, employee)
                .await
                .map_err(to_core_error)?
                .ok_or(CoreError::NotFound {
                    entity: ENTITY_NAME,
                    id,
                })?,
        };
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(to_core_error)?;
        Ok(())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(to_core_error)
    }
}

/// Classify a sqlx error into a domain error.
///
/// - Unique violations (SQLSTATE 23505) on the email constraint map to
///   `Conflict`; this is what a lost create race surfaces as.
/// - Everything else maps to `Storage`.
fn to_core_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let unique_violation = db_err.code().as_deref() == Some("23505");
        if unique_violation && db_err.constraint() == Some(EMAIL_CONSTRAINT) {
            return CoreError::Conflict("Employee already exists with this email".to_string());
        }
    }
    CoreError::Storage(err.to_string())
}
