//! Employee business rules.
//!
//! [`EmployeeService`] is the only place that decides anything about an
//! employee's lifecycle:
//!
//! - an email may belong to at most one employee (checked at creation);
//! - an employee's email never changes after creation (checked at update).
//!
//! Each mutating operation issues exactly one write through the repository.

use std::sync::Arc;

use crate::employee::{self, EmployeeDto, ENTITY_NAME};
use crate::error::CoreError;
use crate::repository::EmployeeRepository;
use crate::types::DbId;

/// Orchestrates repository and mapper calls for the four CRUD operations.
///
/// Cheap to clone; the repository sits behind an `Arc`.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Fetch an employee, failing with `NotFound` if the id is unknown.
    pub async fn get_employee_by_id(&self, id: DbId) -> Result<EmployeeDto, CoreError> {
        tracing::debug!(employee_id = id, "Fetching employee");
        let employee = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENTITY_NAME,
                id,
            })?;
        Ok(employee::to_dto(&employee))
    }

    /// Create an employee from `dto`. Any supplied id is ignored.
    ///
    /// Fails with `Conflict` (and writes nothing) if the email is taken.
    pub async fn create_new_employee(&self, dto: EmployeeDto) -> Result<EmployeeDto, CoreError> {
        let existing = self.repo.find_by_email(&dto.email).await?;
        if !existing.is_empty() {
            tracing::warn!(email = %dto.email, "Rejected create: email already exists");
            return Err(CoreError::Conflict(format!(
                "Employee already exists with email: {}",
                dto.email
            )));
        }

        let saved = self.repo.save(&employee::to_entity(dto)).await?;
        tracing::info!(employee_id = ?saved.id, email = %saved.email, "Employee created");
        Ok(employee::to_dto(&saved))
    }

    /// Overwrite name and salary of an existing employee.
    ///
    /// Fails with `NotFound` if the id is unknown and with `InvalidOperation`
    /// if `dto.email` differs from the stored email. Neither failure writes.
    pub async fn update_employee(
        &self,
        id: DbId,
        dto: EmployeeDto,
    ) -> Result<EmployeeDto, CoreError> {
        let mut employee = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENTITY_NAME,
                id,
            })?;

        if employee.email != dto.email {
            tracing::warn!(
                employee_id = id,
                stored = %employee.email,
                requested = %dto.email,
                "Rejected update: email is immutable"
            );
            return Err(CoreError::InvalidOperation(
                "The email of the employee cannot be updated".to_string(),
            ));
        }

        employee.name = dto.name;
        employee.salary = dto.salary;

        let saved = self.repo.save(&employee).await?;
        tracing::info!(employee_id = id, "Employee updated");
        Ok(employee::to_dto(&saved))
    }

    /// Delete an employee, failing with `NotFound` if the id is unknown.
    pub async fn delete_employee(&self, id: DbId) -> Result<(), CoreError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(CoreError::NotFound {
                entity: ENTITY_NAME,
                id,
            });
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
