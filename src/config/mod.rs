//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the gateway
//! configuration from a TOML file, with environment variable overrides for
//! the connection settings.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: off, trace, debug, info, warn or error
//! - **backend**: backend identifier handed to the factory (e.g. `postgresql`)
//! - **database**: the five connection settings (name, user, password, host, port)
//!
//! # Environment
//!
//! `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_HOST` and `DB_PORT` override the
//! matching `database` fields when set.
//!
//! # Example
//!
//! ```rust,ignore
//! use crud_gateway::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! config.apply_env_overrides()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
