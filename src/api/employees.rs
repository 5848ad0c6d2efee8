//! Employee API endpoints.
//!
//! Derived read operations (search, highest salary, top ten) reuse the
//! upstream "list all" call and post-process in memory; only get-by-id,
//! create, and delete talk to their own upstream endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{CreateEmployeeInput, Employee};
use crate::AppState;

/// How many earners the top-earners listing returns.
const TOP_EARNER_COUNT: usize = 10;

/// GET /employee - List all employees.
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    tracing::info!("Fetching all employees");
    let employees = state.client.list().await?;
    Ok(Json(employees))
}

/// GET /employee/search/:fragment - List employees whose name contains the fragment.
pub async fn search_employees_by_name(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> ApiResult<Vec<Employee>> {
    tracing::info!("Searching employees by name: {}", fragment);
    let needle = fragment.to_lowercase();

    let filtered = state
        .client
        .list()
        .await?
        .into_iter()
        .filter(|employee| {
            employee
                .name
                .as_ref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect();

    Ok(Json(filtered))
}

/// GET /employee/:id - Get a single employee.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    tracing::info!("Fetching employee by id: {}", id);
    let employee = state.client.get_by_id(&id).await?;
    Ok(Json(employee))
}

/// GET /employee/highestSalary - Maximum salary across all employees.
pub async fn highest_salary(State(state): State<AppState>) -> ApiResult<i64> {
    tracing::info!("Getting highest salary");
    let max = state
        .client
        .list()
        .await?
        .into_iter()
        .filter_map(|employee| employee.salary)
        .max()
        .unwrap_or(0);

    Ok(Json(max))
}

/// GET /employee/topTenHighestEarningEmployeeNames - Names of the ten highest earners.
pub async fn top_earner_names(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    tracing::info!("Getting top {} highest earning employee names", TOP_EARNER_COUNT);

    let mut salaried: Vec<Employee> = state
        .client
        .list()
        .await?
        .into_iter()
        .filter(|employee| employee.salary.is_some())
        .collect();

    // Stable sort keeps upstream order as the tie-break for equal salaries.
    salaried.sort_by(|a, b| b.salary.cmp(&a.salary));
    salaried.truncate(TOP_EARNER_COUNT);

    let names = salaried
        .into_iter()
        .filter_map(|employee| employee.name)
        .collect();

    Ok(Json(names))
}

/// POST /employee - Create a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployeeInput>,
) -> ApiResult<Employee> {
    tracing::info!("Creating employee: {:?}", input.name);

    // Validation failures never reach upstream.
    let body = input.validate().map_err(|err| {
        tracing::warn!("Invalid employee input: {}", err);
        err
    })?;

    let employee = state.client.create(&body).await?;
    Ok(Json(employee))
}

/// DELETE /employee/:id - Delete an employee.
///
/// The upstream delete call is keyed by name, so the current name is
/// resolved through get-by-id first. Returns the deleted name.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<String> {
    tracing::info!("Deleting employee by id: {}", id);

    let employee = state.client.get_by_id(&id).await?;

    let name = match employee.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            tracing::error!("Employee {} has a blank name, refusing to delete", id);
            return Err(AppError::Upstream("Employee name is blank".to_string()));
        }
    };

    state.client.delete_by_name(&name).await?;
    Ok(Json(name))
}
