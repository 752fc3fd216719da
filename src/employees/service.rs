//! Employee operations built on top of an [`EmployeeDirectory`].

use std::sync::Arc;
use uuid::Uuid;

use crate::employees::types::{Employee, NewEmployee};
use crate::error::{ApiError, ApiResult};
use crate::upstream::EmployeeDirectory;

/// How many names the top-earners query returns.
pub const TOP_EARNER_LIMIT: usize = 10;

/// Business logic for the employee endpoints.
#[derive(Clone)]
pub struct EmployeeService {
    directory: Arc<dyn EmployeeDirectory>,
}

impl EmployeeService {
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    /// All employees in upstream order.
    pub async fn list_all(&self) -> ApiResult<Vec<Employee>> {
        tracing::debug!("Fetching all employees from upstream");
        self.directory.list().await
    }

    /// Employees whose name contains `fragment`, ignoring case.
    pub async fn search_by_name(&self, fragment: &str) -> ApiResult<Vec<Employee>> {
        tracing::debug!(fragment, "Searching employees by name fragment");
        let employees = self.list_all().await?;
        Ok(filter_by_name(employees, fragment))
    }

    /// A single employee. An upstream 404 or empty payload becomes `NotFound`.
    pub async fn get_by_id(&self, id: Uuid) -> ApiResult<Employee> {
        tracing::debug!(%id, "Fetching employee by id");
        match self.directory.get(id).await {
            Ok(Some(employee)) => Ok(employee),
            Ok(None) | Err(ApiError::Upstream { status: 404, .. }) => {
                tracing::warn!(%id, "Employee not found");
                Err(ApiError::NotFound(format!("Employee not found with ID: {}", id)))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn highest_salary(&self) -> ApiResult<u64> {
        let employees = self.list_all().await?;
        Ok(highest_salary(&employees))
    }

    pub async fn top_earner_names(&self) -> ApiResult<Vec<String>> {
        let employees = self.list_all().await?;
        Ok(top_earner_names(employees, TOP_EARNER_LIMIT))
    }

    pub async fn create(&self, employee: &NewEmployee) -> ApiResult<Employee> {
        tracing::debug!(name = %employee.name, "Creating employee");
        self.directory.create(employee).await
    }

    /// Delete an employee and return its name.
    ///
    /// The upstream deletes by name, so the record is looked up first. When
    /// several employees share that name the upstream decides which one goes.
    pub async fn delete_by_id(&self, id: Uuid) -> ApiResult<String> {
        let employee = self.get_by_id(id).await?;

        if self.directory.delete_by_name(&employee.name).await? {
            tracing::info!(%id, name = %employee.name, "Employee deleted");
            Ok(employee.name)
        } else {
            tracing::error!(name = %employee.name, "Upstream refused delete");
            Err(ApiError::Internal(format!(
                "Unable to delete resource with name : {}",
                employee.name
            )))
        }
    }
}

/// Case-insensitive substring filter that keeps input order.
///
/// Employees without a name never match.
pub fn filter_by_name(employees: Vec<Employee>, fragment: &str) -> Vec<Employee> {
    let needle = fragment.to_lowercase();
    employees
        .into_iter()
        .filter(|e| !e.name.is_empty() && e.name.to_lowercase().contains(&needle))
        .collect()
}

/// Maximum salary, or 0 for no employees.
pub fn highest_salary(employees: &[Employee]) -> u64 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best paid employees, highest first.
///
/// Equal salaries keep their input order.
pub fn top_earner_names(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees.into_iter().take(limit).map(|e| e.name).collect()
}
