//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the employee handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Stop on the shutdown signal

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ConfigError, ServiceConfig};
use crate::employees::EmployeeService;
use crate::http::handlers;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::ShutdownListener;
use crate::upstream::{EmployeeDirectory, UpstreamClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

/// HTTP server for the employee proxy.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server that talks to the configured upstream service.
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        let client = UpstreamClient::new(&config.upstream)?;
        Ok(Self::with_directory(config, Arc::new(client)))
    }

    /// Create a server backed by any employee directory.
    pub fn with_directory(config: ServiceConfig, directory: Arc<dyn EmployeeDirectory>) -> Self {
        let state = AppState {
            employees: EmployeeService::new(directory),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/employees",
                get(handlers::list_employees).post(handlers::create_employee),
            )
            .route("/employees/search/{fragment}", get(handlers::search_employees))
            .route("/employees/highest-salary", get(handlers::highest_salary))
            .route("/employees/top-10-salaries", get(handlers::top_earners))
            .route(
                "/employees/{id}",
                get(handlers::get_employee).delete(handlers::delete_employee),
            )
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// A clone of the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
