//! Database enumeration types.

/// Supported database driver dialects (sqlite3, mysql, pgsql).
pub mod database_drivers;

/// CRUD operations, used for error context and log lines.
pub mod crud_operation;

/// Scalar values bound to statements and decoded from rows.
pub mod sql_value;
