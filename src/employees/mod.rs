//! Employee domain: data model, create-request validation and the
//! list/search/aggregate/create/delete operations.

pub mod service;
pub mod types;

pub use service::EmployeeService;
pub use types::{Employee, EmployeeCreateRequest, NewEmployee};
