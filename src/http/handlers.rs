//! Employee endpoint handlers.
//!
//! Each handler validates its input, delegates to [`EmployeeService`] and
//! maps the result onto a status code. Failures are rendered by the
//! `IntoResponse` impl in `http::error`.
//!
//! [`EmployeeService`]: crate::employees::EmployeeService

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Instant;
use uuid::Uuid;

use crate::employees::EmployeeCreateRequest;
use crate::error::{ApiError, ApiResult};
use crate::http::server::AppState;
use crate::observability::metrics;

pub const INVALID_ID_MESSAGE: &str = "Please provide valid UUID as employee ID";

/// Parse a path identifier, rejecting anything that is not a UUID.
pub fn parse_employee_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::Validation(INVALID_ID_MESSAGE.to_string()))
}

/// Render the result and record request metrics.
fn finish<T: IntoResponse>(operation: &'static str, start: Instant, result: ApiResult<T>) -> Response {
    let response = match result {
        Ok(body) => body.into_response(),
        Err(e) => e.into_response(),
    };
    metrics::record_request(operation, response.status().as_u16(), start);
    response
}

pub async fn list_employees(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    tracing::info!("Request received to get all employees");

    let result = state.employees.list_all().await.map(|employees| {
        tracing::info!(count = employees.len(), "Returning employees");
        Json(employees)
    });
    finish("list", start, result)
}

pub async fn search_employees(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> Response {
    let start = Instant::now();
    tracing::info!(fragment = %fragment, "Request received to search employees by name");

    let result = state.employees.search_by_name(&fragment).await.map(|employees| {
        tracing::info!(count = employees.len(), fragment = %fragment, "Found matching employees");
        Json(employees)
    });
    finish("search", start, result)
}

pub async fn get_employee(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let start = Instant::now();
    tracing::info!(id = %id, "Request received to get employee by id");

    let result = async {
        let id = parse_employee_id(&id)?;
        let employee = state.employees.get_by_id(id).await?;
        tracing::info!(%id, "Found employee");
        Ok::<_, ApiError>(Json(employee))
    }
    .await;
    finish("get", start, result)
}

pub async fn highest_salary(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    tracing::info!("Request received to get highest salary");

    let result = state.employees.highest_salary().await.map(|salary| {
        tracing::info!(salary, "Highest salary found");
        Json(salary)
    });
    finish("highest_salary", start, result)
}

pub async fn top_earners(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    tracing::info!("Request received to get top earning employee names");

    let result = state.employees.top_earner_names().await.map(|names| {
        tracing::info!(count = names.len(), "Returning top earners");
        Json(names)
    });
    finish("top_earners", start, result)
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeCreateRequest>, JsonRejection>,
) -> Response {
    let start = Instant::now();
    tracing::info!("Request received to create a new employee");

    let result = async {
        let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        let new_employee = request.validate()?;
        let created = state.employees.create(&new_employee).await?;
        tracing::info!(id = %created.id, "Employee created");
        Ok::<_, ApiError>((StatusCode::CREATED, Json(created)))
    }
    .await;
    finish("create", start, result)
}

pub async fn delete_employee(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let start = Instant::now();
    tracing::info!(id = %id, "Request received to delete an employee");

    let result = async {
        let id = parse_employee_id(&id)?;
        let name = state.employees.delete_by_id(id).await?;
        Ok::<_, ApiError>(name)
    }
    .await;
    finish("delete", start, result)
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
