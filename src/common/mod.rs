//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Log level parsing
//! - Logging setup (colored `fern` dispatch to stderr)
//!
//! # Example
//!
//! ```rust,ignore
//! use crud_gateway::common::common::setup_logging;
//!
//! setup_logging(&config)?;
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
