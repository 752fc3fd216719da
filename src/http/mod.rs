//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → request.rs (request ID, tracing span)
//!     → server.rs (routing, timeout)
//!     → handlers.rs (validate input, call EmployeeService)
//!     → error.rs (ApiError → status + body)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
