//! Tracing and logging (shared setup).
//!
//! Binaries call [`tracing::init`] once at startup with the configured
//! [`LogFormat`]; repeated calls are no-ops.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;
