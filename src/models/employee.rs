//! Employee resource model and creation input.

use serde::{Deserialize, Serialize};

use crate::client::CreateEmployeeBody;
use crate::errors::AppError;

/// Minimum accepted age for a new employee.
pub const MIN_AGE: i64 = 16;
/// Maximum accepted age for a new employee.
pub const MAX_AGE: i64 = 75;

/// An employee as exposed to callers.
///
/// Every field except `id` can be absent: upstream payloads missing a field
/// (or carrying a non-integer salary/age) still map to a usable record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request body for creating a new employee.
///
/// All fields are optional at the serde layer so missing values surface as
/// validation errors instead of deserialization rejections.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
}

impl CreateEmployeeInput {
    /// Validate the input and produce the upstream creation body.
    ///
    /// Runs entirely before any upstream call; a failure here never reaches
    /// the upstream API.
    pub fn validate(&self) -> Result<CreateEmployeeBody, AppError> {
        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(AppError::Validation("Name must not be blank".to_string())),
        };

        let salary = match self.salary {
            Some(salary) if salary > 0 => salary,
            _ => {
                return Err(AppError::Validation(
                    "Salary must be a positive integer".to_string(),
                ))
            }
        };

        let age = match self.age {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => age,
            _ => {
                return Err(AppError::Validation(format!(
                    "Age must be between {} and {}",
                    MIN_AGE, MAX_AGE
                )))
            }
        };

        let title = match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => return Err(AppError::Validation("Title must not be blank".to_string())),
        };

        Ok(CreateEmployeeBody {
            name,
            salary,
            age,
            title,
        })
    }
}
