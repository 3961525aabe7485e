//! Database backend module with multi-database support.
//!
//! This module holds everything that talks SQL: the statement builder, the
//! backend contract every driver implements, and the connectors for
//! PostgreSQL, MySQL and SQLite.
//!
//! # Architecture
//!
//! - `StatementBuilder` turns structured CRUD requests into SQL text plus an
//!   ordered list of bound values, keyed by the driver dialect
//! - `DatabaseBackend` trait defines the driver contract (execute, fetch,
//!   begin/commit/rollback, close)
//! - Each engine has its own connector owning exactly one `sqlx` connection
//!
//! # Trust boundary
//!
//! Inserted values are always bound as parameters. Table names, column names,
//! set-clauses and conditions are inlined verbatim; the latter two are wrapped
//! in [`SqlFragment`](structs::sql_fragment::SqlFragment) so that callers opt
//! into raw SQL explicitly.
//!
//! # Example
//!
//! ```rust
//! use crud_gateway::database::enums::database_drivers::DatabaseDrivers;
//! use crud_gateway::database::structs::sql_fragment::SqlFragment;
//! use crud_gateway::database::structs::statement_builder::StatementBuilder;
//!
//! let builder = StatementBuilder::new(DatabaseDrivers::pgsql);
//! let sql = builder.build_select("employees", Some(&SqlFragment::raw("id=1")));
//! assert_eq!(sql, "SELECT * FROM employees WHERE id=1");
//! ```

/// Database enumerations (drivers, operations, values).
pub mod enums;

/// Error types for database operations.
pub mod errors;

/// Implementation blocks for builders, values and connectors.
pub mod impls;

/// Data structures for statements, rows and connectors.
pub mod structs;

/// Database backend trait definitions.
pub mod traits;
