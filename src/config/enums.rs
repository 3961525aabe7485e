//! Configuration enumeration types.

/// Errors raised while loading, saving or applying configuration.
pub mod configuration_error;
