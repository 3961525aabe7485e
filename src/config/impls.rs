//! Implementation blocks for configuration types.

/// Configuration implementation: defaults, file I/O, validation, overrides.
pub mod configuration;

/// ConfigurationError implementation: Display, Error.
pub mod configuration_error;

/// DatabaseConfig implementation: per-engine validation, redacted Debug.
pub mod database_config;
