//! HTTP client for the upstream employee-data service.
//!
//! # Responsibilities
//! - Issue GET / POST / DELETE calls against the configured base URL
//! - Decode the `{status, data}` envelope into the call's payload shape
//! - Surface non-2xx responses with their status code and body

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use crate::config::validation::ValidationError;
use crate::config::{ConfigError, UpstreamConfig};
use crate::employees::{Employee, NewEmployee};
use crate::error::{ApiError, ApiResult};
use crate::observability::metrics;
use crate::upstream::envelope::Envelope;
use crate::upstream::EmployeeDirectory;

/// Body of the upstream delete call, which deletes by name.
#[derive(Debug, Serialize)]
struct DeleteByName<'a> {
    name: &'a str,
}

/// reqwest-backed [`EmployeeDirectory`].
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
}

impl UpstreamClient {
    /// Build a client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ConfigError> {
        let base: url::Url = config.base_url.parse().map_err(|e: url::ParseError| {
            ConfigError::Validation(vec![ValidationError::InvalidUpstreamUrl(
                config.base_url.clone(),
                e.to_string(),
            )])
        })?;

        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs));
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        tracing::info!(base_url = %base, "Upstream client initialized");

        Ok(Self {
            http,
            base_url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn employee_url(&self, id: Uuid) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Send one request and decode its envelope.
    async fn call(&self, method: &'static str, request: RequestBuilder) -> ApiResult<Envelope> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(method, error = %e, "Upstream unreachable");
            ApiError::from(e)
        })?;

        let status = response.status();
        metrics::record_upstream(method, status.as_u16());
        let body = response.text().await?;

        tracing::debug!(method, status = %status, "Upstream response received");

        if !status.is_success() {
            tracing::warn!(
                method,
                status = status.as_u16(),
                body = %body,
                "Upstream returned error status"
            );
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl EmployeeDirectory for UpstreamClient {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        let request = self.http.get(&self.base_url);
        self.call("GET", request).await?.into_employees()
    }

    async fn get(&self, id: Uuid) -> ApiResult<Option<Employee>> {
        let request = self.http.get(self.employee_url(id));
        self.call("GET", request).await?.into_employee()
    }

    async fn create(&self, employee: &NewEmployee) -> ApiResult<Employee> {
        let request = self.http.post(&self.base_url).json(employee);
        self.call("POST", request).await?.into_employee()?.ok_or_else(|| {
            ApiError::Internal("Upstream returned no employee for create request".to_string())
        })
    }

    async fn delete_by_name(&self, name: &str) -> ApiResult<bool> {
        let request = self.http.delete(&self.base_url).json(&DeleteByName { name });
        self.call("DELETE", request).await?.into_flag()
    }
}
