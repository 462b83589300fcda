#![deny(missing_docs)]

//! Shared configuration, error types, and observability primitives for SQF crates.
//!
//! Architecture role:
//! - defines the templatizer configuration passed across layers
//! - provides the common [`SqfError`] / [`Result`] contracts
//! - hosts the extraction metrics registry
//!
//! Key modules:
//! - [`config`]
//! - [`error`]
//! - [`metrics`]

/// Shared templatizer configuration types.
pub mod config;
/// Shared error taxonomy.
pub mod error;
/// Metrics registry and Prometheus rendering helpers.
pub mod metrics;

pub use config::TemplatizerConfig;
pub use error::{Result, SqfError};
pub use metrics::MetricsRegistry;
