//! Route definitions for employees.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Employee routes.
///
/// ```text
/// POST   /employees        -> create
/// GET    /employees/{id}   -> get_by_id
/// PUT    /employees/{id}   -> update
/// DELETE /employees/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", post(employee::create))
        .route(
            "/employees/{id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
}
