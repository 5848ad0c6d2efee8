//! Typed client for the upstream mock employee API.
//!
//! The upstream wraps every response in a `{"data": ...}` envelope. This
//! client unwraps the envelope, decodes payloads into typed records, and
//! translates upstream throttling into [`AppError::RateLimited`].

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::Employee;

const EMPLOYEE_PATH: &str = "/employee";

/// Response envelope used by the upstream API for all payloads.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// An employee record as the upstream API serializes it.
#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamEmployee {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    employee_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    employee_salary: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    employee_age: Option<i64>,
    #[serde(default)]
    employee_title: Option<String>,
    #[serde(default)]
    employee_email: Option<String>,
}

impl From<UpstreamEmployee> for Employee {
    fn from(upstream: UpstreamEmployee) -> Self {
        Employee {
            id: upstream.id,
            name: upstream.employee_name,
            salary: upstream.employee_salary,
            age: upstream.employee_age,
            title: upstream.employee_title,
            email: upstream.employee_email,
        }
    }
}

/// Upstream request body for employee creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEmployeeBody {
    pub name: String,
    pub salary: i64,
    pub age: i64,
    pub title: String,
}

/// Upstream request body for employee deletion, keyed by name.
#[derive(Debug, Serialize)]
struct DeleteEmployeeBody {
    name: String,
}

/// Accept integers, map any other JSON value (or absence) to `None`.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

/// Client for all upstream employee operations.
///
/// Holds an explicitly constructed `reqwest::Client` injected at startup.
#[derive(Clone)]
pub struct EmployeeClient {
    http: reqwest::Client,
    base_url: String,
}

impl EmployeeClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, EMPLOYEE_PATH)
    }

    /// Fetch all employees from upstream.
    ///
    /// An absent body, absent `data` field, or any non-throttling fetch
    /// failure yields an empty list; absence of data and failure to fetch
    /// data are not distinguished on the collection path. Elements that
    /// fail to decode are dropped. Upstream order is preserved.
    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let response = match self.http.get(self.collection_url()).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("Failed to reach upstream for employee list: {}", err);
                return Ok(Vec::new());
            }
        };

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            tracing::error!("Rate limited by upstream API while listing employees");
            return Err(AppError::RateLimited);
        }

        let envelope: Envelope<Vec<Value>> = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!("Undecodable employee list from upstream: {}", err);
                return Ok(Vec::new());
            }
        };

        let Some(data) = envelope.data else {
            tracing::warn!("No employee data found");
            return Ok(Vec::new());
        };

        Ok(data
            .into_iter()
            .filter_map(|value| serde_json::from_value::<UpstreamEmployee>(value).ok())
            .map(Employee::from)
            .collect())
    }

    /// Fetch a single employee by id.
    ///
    /// Every non-throttling failure collapses to `NotFound`: absent body,
    /// absent `data`, unmappable payload, transport errors and upstream
    /// error statuses alike.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee, AppError> {
        let url = format!("{}/{}", self.collection_url(), id);
        let response = self.http.get(&url).send().await.map_err(|err| {
            tracing::error!("Error fetching employee {}: {}", id, err);
            not_found()
        })?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            tracing::error!("Rate limited by upstream API while fetching employee {}", id);
            return Err(AppError::RateLimited);
        }

        let envelope: Envelope<Value> = response.json().await.map_err(|_| {
            tracing::warn!("Employee not found for id: {}", id);
            not_found()
        })?;

        let data = envelope.data.ok_or_else(|| {
            tracing::warn!("Employee not found for id: {}", id);
            not_found()
        })?;

        let upstream: UpstreamEmployee = serde_json::from_value(data).map_err(|_| not_found())?;
        Ok(upstream.into())
    }

    /// Create an employee upstream from an already-validated body.
    pub async fn create(&self, body: &CreateEmployeeBody) -> Result<Employee, AppError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error creating employee: {}", err);
                creation_failed()
            })?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            tracing::error!("Rate limited by upstream API while creating employee");
            return Err(AppError::RateLimited);
        }
        if !response.status().is_success() {
            tracing::error!(
                "Upstream returned {} while creating employee",
                response.status()
            );
            return Err(creation_failed());
        }

        let envelope: Envelope<Value> = response.json().await.map_err(|_| creation_failed())?;
        let data = envelope.data.ok_or_else(|| {
            tracing::error!("No data from upstream API when creating employee");
            creation_failed()
        })?;

        let upstream: UpstreamEmployee =
            serde_json::from_value(data).map_err(|_| creation_failed())?;
        Ok(upstream.into())
    }

    /// Delete an employee upstream. The upstream delete operation is keyed
    /// by name, not id; success is a 2xx response carrying `{"data": true}`.
    pub async fn delete_by_name(&self, name: &str) -> Result<(), AppError> {
        let body = DeleteEmployeeBody {
            name: name.to_string(),
        };
        let response = self
            .http
            .delete(self.collection_url())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error deleting employee {}: {}", name, err);
                deletion_failed()
            })?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            tracing::error!("Rate limited by upstream API while deleting employee");
            return Err(AppError::RateLimited);
        }
        if !response.status().is_success() {
            tracing::error!("Failed to delete employee: {}", name);
            return Err(deletion_failed());
        }

        let envelope: Envelope<bool> = response.json().await.map_err(|_| deletion_failed())?;
        if envelope.data == Some(true) {
            Ok(())
        } else {
            tracing::error!("Failed to delete employee: {}", name);
            Err(deletion_failed())
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

fn creation_failed() -> AppError {
    AppError::Upstream("Error creating employee".to_string())
}

fn deletion_failed() -> AppError {
    AppError::Upstream("Failed to delete employee".to_string())
}
