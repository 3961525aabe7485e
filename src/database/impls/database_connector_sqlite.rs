use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::row::Row;
use crate::database::traits::database_backend::DatabaseBackend;
use async_trait::async_trait;
use log::{error, info};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqliteRow};
use sqlx::{Column, ConnectOptions, Connection, Row as SqlxRow, Sqlite, SqliteConnection, TypeInfo, ValueRef};
use std::str::FromStr;
use std::time::Duration;

const ENGINE: DatabaseDrivers = DatabaseDrivers::sqlite3;
const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnectorSQLite, DatabaseError> {
        config.validate(ENGINE)?;
        let options = SqliteConnectOptions::from_str(&config.name)?
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        match options.connect().await {
            Ok(connection) => {
                info!("{} Opened database {}", LOG_PREFIX, config.name);
                Ok(DatabaseConnectorSQLite { connection: Some(connection) })
            }
            Err(e) => {
                error!("{} Unable to open database {}", LOG_PREFIX, config.name);
                error!("{} Message: {}", LOG_PREFIX, e);
                Err(DatabaseError::ConnectionError(e.to_string()))
            }
        }
    }

    fn connection(&mut self) -> Result<&mut SqliteConnection, DatabaseError> {
        self.connection
            .as_mut()
            .ok_or_else(|| DatabaseError::ConnectionError(format!("{} connection is closed", LOG_PREFIX)))
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    fn engine(&self) -> DatabaseDrivers {
        ENGINE
    }

    async fn begin(&mut self) -> Result<(), DatabaseError> {
        sqlx::query("BEGIN").execute(self.connection()?).await?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), DatabaseError> {
        sqlx::query("COMMIT").execute(self.connection()?).await?;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DatabaseError> {
        sqlx::query("ROLLBACK").execute(self.connection()?).await?;
        Ok(())
    }

    async fn execute(&mut self, sql: &str, values: &[SqlValue]) -> Result<u64, DatabaseError> {
        let result = bind_values(sqlx::query(sql), values)
            .execute(self.connection()?)
            .await?;
        Ok(result.rows_affected())
    }

    async fn fetch_all(&mut self, sql: &str, values: &[SqlValue]) -> Result<Vec<Row>, DatabaseError> {
        let rows = bind_values(sqlx::query(sql), values)
            .fetch_all(self.connection()?)
            .await?;
        rows.iter().map(decode_row).collect()
    }

    async fn close(&mut self) -> Result<(), DatabaseError> {
        if let Some(connection) = self.connection.take() {
            connection.close().await?;
            info!("{} Connection closed", LOG_PREFIX);
        }
        Ok(())
    }
}

fn bind_values<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: &'q [SqlValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Bool(v) => query.bind(*v),
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Float(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Bytes(v) => query.bind(v.as_slice()),
        };
    }
    query
}

fn decode_row(row: &SqliteRow) -> Result<Row, DatabaseError> {
    let columns = row.columns().iter().map(|column| column.name().to_string()).collect();
    let values = (0..row.len())
        .map(|index| decode_value(row, index))
        .collect::<Result<Vec<SqlValue>, DatabaseError>>()?;
    Ok(Row::new(columns, values))
}

// SQLite reports the storage class of each value, not the declared column type.
fn decode_value(row: &SqliteRow, index: usize) -> Result<SqlValue, DatabaseError> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }
    let type_name = raw.type_info().name().to_ascii_uppercase();
    let value = match type_name.as_str() {
        "INTEGER" | "INT8" => SqlValue::Int(row.try_get_unchecked(index)?),
        "BOOLEAN" => SqlValue::Bool(row.try_get_unchecked(index)?),
        "REAL" | "NUMERIC" => SqlValue::Float(row.try_get_unchecked(index)?),
        "BLOB" => SqlValue::Bytes(row.try_get_unchecked(index)?),
        _ => SqlValue::Text(row.try_get_unchecked(index)?),
    };
    Ok(value)
}
