use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::row::Row;
use async_trait::async_trait;

/// A single live connection to one database engine.
///
/// Implementations own their connection exclusively. After `close` every
/// other method fails with [`DatabaseError::ConnectionError`] and `close`
/// itself does nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseBackend: Send {
    fn engine(&self) -> DatabaseDrivers;

    async fn begin(&mut self) -> Result<(), DatabaseError>;

    async fn commit(&mut self) -> Result<(), DatabaseError>;

    async fn rollback(&mut self) -> Result<(), DatabaseError>;

    /// Runs a statement that returns no rows, yielding the affected row count.
    async fn execute(&mut self, sql: &str, values: &[SqlValue]) -> Result<u64, DatabaseError>;

    async fn fetch_all(&mut self, sql: &str, values: &[SqlValue]) -> Result<Vec<Row>, DatabaseError>;

    async fn close(&mut self) -> Result<(), DatabaseError>;
}
