//! Handlers for the `/employees` resource.
//!
//! Pure marshalling: extract, call [`EmployeeService`], translate the result.
//! All decisions (email uniqueness, email immutability) live in the service.
//!
//! [`EmployeeService`]: roster_core::service::EmployeeService

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roster_core::employee::EmployeeDto;
use roster_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = employee_id(path)?;
    let employee = state.employees.get_employee_by_id(id).await?;
    Ok(Json(employee))
}

/// POST /employees
///
/// Create a new employee. Any `id` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EmployeeDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = employee_body(body)?;
    let employee = state.employees.create_new_employee(input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /employees/{id}
///
/// Update name and salary. The email in the body must match the stored one.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<EmployeeDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = employee_id(path)?;
    let input = employee_body(body)?;
    let employee = state.employees.update_employee(id, input).await?;
    Ok(Json(employee))
}

/// DELETE /employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = employee_id(path)?;
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Extraction helpers
// ---------------------------------------------------------------------------

fn employee_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn employee_body(body: Result<Json<EmployeeDto>, JsonRejection>) -> AppResult<EmployeeDto> {
    body.map(|Json(dto)| dto)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
