//! # CRUD Gateway
//!
//! A thin create/read/update/delete layer over relational databases, with
//! the backend chosen at runtime by a string identifier.
//!
//! ## Overview
//!
//! A [`BackendFactory`](gateway::structs::backend_factory::BackendFactory)
//! maps identifiers such as `postgresql`, `mysql` or `sqlite` to connectors.
//! Asking it for a gateway opens exactly one connection, wrapped in a
//! [`CrudGateway`](gateway::structs::crud_gateway::CrudGateway) that turns
//! structured requests into SQL and runs writes inside a transaction.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crud_gateway::config::structs::configuration::Configuration;
//! use crud_gateway::database::structs::sql_fragment::SqlFragment;
//! use crud_gateway::gateway::structs::backend_factory::BackendFactory;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let mut gateway = BackendFactory::default()
//!     .create_gateway("postgresql", &config.database)
//!     .await?;
//! gateway.create("employees", &[("first_name", "Jane").into(), ("salary", 50000).into()]).await?;
//! let rows = gateway.read("employees", Some(&SqlFragment::raw("first_name='Jane'"))).await?;
//! gateway.close().await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration loading, validation and environment overrides
//! - [`database`] - Statement builder, backend contract and sqlx connectors
//! - [`gateway`] - The CRUD gateway and the backend factory
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files
/// and environment variables.
pub mod config;

/// Database backend module with multi-database support.
///
/// Provides the statement builder and one connector each for SQLite, MySQL
/// and PostgreSQL behind a single backend trait.
pub mod database;

/// CRUD gateway and backend factory.
pub mod gateway;

/// CLI argument parsing.
pub mod structs;
