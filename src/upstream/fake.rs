//! In-memory [`EmployeeDirectory`] for unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::employees::{Employee, NewEmployee};
use crate::error::{ApiError, ApiResult};
use crate::upstream::EmployeeDirectory;

#[derive(Default)]
pub(crate) struct FakeDirectory {
    employees: Mutex<Vec<Employee>>,
    /// When set, every call fails with this upstream status.
    failure: Mutex<Option<u16>>,
    refuse_delete: AtomicBool,
    /// When set, `get` succeeds with no employee.
    null_get: AtomicBool,
    pub calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn with(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
            ..Self::default()
        }
    }

    pub fn fail_with(&self, status: u16) {
        *self.failure.lock().unwrap() = Some(status);
    }

    pub fn refuse_delete(&self) {
        self.refuse_delete.store(true, Ordering::SeqCst);
    }

    pub fn answer_get_with_null(&self) {
        self.null_get.store(true, Ordering::SeqCst);
    }

    pub fn total_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> ApiResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.failure.lock().unwrap() {
            Some(status) => Err(ApiError::Upstream {
                status,
                message: format!("forced failure {}", status),
            }),
            None => Ok(()),
        }
    }
}

pub(crate) fn employee(name: &str, salary: u64) -> Employee {
    Employee {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        salary,
        age: 30,
        title: "Engineer".to_string(),
        email: None,
    }
}

pub(crate) fn sample_employees() -> Vec<Employee> {
    vec![
        employee("John Doe", 100_000),
        employee("Jane Doe", 120_000),
        employee("Alice Smith", 90_000),
    ]
}

#[async_trait]
impl EmployeeDirectory for FakeDirectory {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        self.enter()?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get(&self, id: Uuid) -> ApiResult<Option<Employee>> {
        self.enter()?;
        if self.null_get.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let id = id.to_string();
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .map(Some)
            .ok_or(ApiError::Upstream {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    async fn create(&self, new: &NewEmployee) -> ApiResult<Employee> {
        self.enter()?;
        let created = Employee {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            salary: new.salary,
            age: new.age,
            title: new.title.clone(),
            email: None,
        };
        self.employees.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_by_name(&self, name: &str) -> ApiResult<bool> {
        self.enter()?;
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.refuse_delete.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let mut employees = self.employees.lock().unwrap();
        match employees.iter().position(|e| e.name == name) {
            Some(index) => {
                employees.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
