//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and upstream client produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout log stream
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID (x-request-id) set on every request and echoed back
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
