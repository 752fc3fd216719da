//! The upstream `{status, data}` response envelope.
//!
//! The shape of `data` depends on the call: a list of employees, a single
//! employee, or a boolean. Each call site resolves it with the accessor for
//! the shape it expects.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::employees::Employee;
use crate::error::ApiResult;

/// Raw envelope as it arrives on the wire.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Employee list payload. A null `data` reads as an empty list.
    pub fn into_employees(self) -> ApiResult<Vec<Employee>> {
        Ok(self.decode()?.unwrap_or_default())
    }

    /// Single employee payload. `None` when `data` is null.
    pub fn into_employee(self) -> ApiResult<Option<Employee>> {
        self.decode()
    }

    /// Boolean payload. A null `data` reads as `false`.
    pub fn into_flag(self) -> ApiResult<bool> {
        Ok(self.decode()?.unwrap_or(false))
    }

    fn decode<T: DeserializeOwned>(self) -> ApiResult<Option<T>> {
        match self.data {
            Value::Null => Ok(None),
            data => Ok(Some(serde_json::from_value(data)?)),
        }
    }
}
