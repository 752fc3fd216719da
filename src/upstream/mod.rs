//! Upstream employee-data service subsystem.
//!
//! # Data Flow
//! ```text
//! EmployeeService
//!     → EmployeeDirectory (trait seam)
//!     → client.rs (reqwest call against configured base URL)
//!     → envelope.rs ({status, data} → list, employee or flag)
//!     → back to EmployeeService
//! ```
//!
//! # Design Decisions
//! - Non-2xx responses surface as `ApiError::Upstream` with status and body
//! - No retries; every failure goes back to the caller

pub mod client;
pub mod envelope;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use uuid::Uuid;

use crate::employees::{Employee, NewEmployee};
use crate::error::ApiResult;

pub use client::UpstreamClient;
pub use envelope::Envelope;

/// Source of employee records.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Every employee, in upstream order.
    async fn list(&self) -> ApiResult<Vec<Employee>>;

    /// A single employee; `Ok(None)` when the upstream reports no data.
    async fn get(&self, id: Uuid) -> ApiResult<Option<Employee>>;

    /// Create an employee and return it as the upstream stored it.
    async fn create(&self, employee: &NewEmployee) -> ApiResult<Employee>;

    /// Delete by name. Returns the upstream's success flag.
    async fn delete_by_name(&self, name: &str) -> ApiResult<bool>;
}
