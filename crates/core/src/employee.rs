//! Employee entity, its transfer representation, and the mapping between them.
//!
//! [`Employee`] is the persistence-facing shape, one-to-one with a row in the
//! `employees` table. [`EmployeeDto`] is what crosses the HTTP boundary. The
//! conversion functions [`to_dto`] and [`to_entity`] are the only mapping
//! path between the two; they are pure and never touch storage.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Salary};

/// Entity name used in `NotFound` errors and log fields.
pub const ENTITY_NAME: &str = "Employee";

/// A stored (or about to be stored) employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Store-assigned identifier. `None` until the first save.
    pub id: Option<DbId>,
    pub name: String,
    /// Unique across all employees and immutable once persisted.
    pub email: String,
    pub salary: Salary,
}

/// Wire representation of an employee.
///
/// `id` is populated on every response and ignored on create input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub salary: Salary,
}

/* --------------------------------------------------------------------------
Mapping
-------------------------------------------------------------------------- */

/// Map a persisted entity to its wire representation.
pub fn to_dto(employee: &Employee) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        name: employee.name.clone(),
        email: employee.email.clone(),
        salary: employee.salary,
    }
}

/// Map incoming wire data to a fresh, unsaved entity.
///
/// Any identifier supplied by the client is dropped; ids are store-assigned.
pub fn to_entity(dto: EmployeeDto) -> Employee {
    Employee {
        id: None,
        name: dto.name,
        email: dto.email,
        salary: dto.salary,
    }
}
