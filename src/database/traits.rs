//! Database trait definitions.

/// Driver contract implemented by every backend connector.
pub mod database_backend;
