//! Implementation blocks for database types.

/// DatabaseDrivers implementation: Display, placeholder style.
pub mod database_drivers;

/// CrudOperation implementation: Display.
pub mod crud_operation;

/// SqlValue implementation: conversions, literal parsing.
pub mod sql_value;

/// SqlFragment implementation: raw constructor, Display.
pub mod sql_fragment;

/// ColumnValuePair implementation: tuple conversion, `column=value` parsing.
pub mod column_value_pair;

/// Row implementation: lookup by column name.
pub mod row;

/// StatementBuilder implementation: insert, select, update, delete.
pub mod statement_builder;

/// SQLite connector implementation.
pub mod database_connector_sqlite;

/// MySQL connector implementation.
pub mod database_connector_mysql;

/// PostgreSQL connector implementation.
pub mod database_connector_pgsql;
