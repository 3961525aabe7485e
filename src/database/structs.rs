//! Database data structures.

/// Dialect-aware builder producing SQL text and bound values.
pub mod statement_builder;

/// SQL text paired with its ordered bound values.
pub mod statement;

/// Raw SQL text inlined verbatim into statements.
pub mod sql_fragment;

/// Column name and value used by inserts.
pub mod column_value_pair;

/// A single result row in backend column order.
pub mod row;

/// SQLite-specific database connector.
pub mod database_connector_sqlite;

/// MySQL/MariaDB-specific database connector.
pub mod database_connector_mysql;

/// PostgreSQL-specific database connector.
pub mod database_connector_pgsql;
