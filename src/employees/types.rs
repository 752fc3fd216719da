//! Employee data model and create-request validation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ApiError, ApiResult, FieldErrors};

/// Lowest accepted employee age.
pub const MIN_AGE: i64 = 16;
/// Highest accepted employee age.
pub const MAX_AGE: i64 = 75;

/// An employee record as reported by the upstream service.
///
/// The wire shape uses the upstream `employee_` prefix convention plus a
/// bare `id`; the same shape is returned to our own clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Upstream-assigned identifier (UUID formatted).
    pub id: String,
    /// Empty when the upstream record carries no name.
    #[serde(rename = "employee_name", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: u64,
    #[serde(rename = "employee_age", default)]
    pub age: u32,
    #[serde(rename = "employee_title", default)]
    pub title: String,
    #[serde(
        rename = "employee_email",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

/// Inbound body for `POST /employees`.
///
/// Every field is optional at the serde level so that missing values are
/// reported per field instead of as a single deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeCreateRequest {
    pub name: Option<String>,
    pub salary: Option<i64>,
    pub age: Option<i64>,
    pub title: Option<String>,
}

/// A create request that passed validation, ready to forward upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
}

impl EmployeeCreateRequest {
    /// Check every field and collect all failures into one error.
    pub fn validate(self) -> ApiResult<NewEmployee> {
        let mut errors = FieldErrors::new();

        let name = non_blank(self.name);
        if name.is_none() {
            errors.insert("name".into(), "Name cannot be null or blank".into());
        }

        let salary = match self.salary {
            None => {
                errors.insert("salary".into(), "Salary cannot be empty".into());
                None
            }
            Some(s) => match u64::try_from(s) {
                Ok(s) => Some(s),
                Err(_) => {
                    errors.insert("salary".into(), "Salary must not be negative".into());
                    None
                }
            },
        };

        let age = match self.age {
            None => {
                errors.insert("age".into(), "Age cannot be empty".into());
                None
            }
            Some(a) if !(MIN_AGE..=MAX_AGE).contains(&a) => {
                errors.insert(
                    "age".into(),
                    format!("Age must be between {} and {}", MIN_AGE, MAX_AGE),
                );
                None
            }
            Some(a) => u32::try_from(a).ok(),
        };

        let title = non_blank(self.title);
        if title.is_none() {
            errors.insert("title".into(), "Title cannot be null or empty".into());
        }

        match (name, salary, age, title) {
            (Some(name), Some(salary), Some(age), Some(title)) if errors.is_empty() => {
                Ok(NewEmployee {
                    name,
                    salary,
                    age,
                    title,
                })
            }
            _ => Err(ApiError::FieldValidation(errors)),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
