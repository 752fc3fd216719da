//! Employee API proxy library.
//!
//! Exposes employee list/search/aggregate/create/delete endpoints and serves
//! them by delegating to an upstream employee-data service.
//!
//! ```text
//!  client ──▶ http (handlers) ──▶ employees (service) ──▶ upstream (client) ──▶ employee API
//!         ◀── http (error)     ◀──                     ◀── upstream (envelope) ◀──
//! ```

pub mod config;
pub mod employees;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ServiceConfig;
pub use error::{ApiError, ApiResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
