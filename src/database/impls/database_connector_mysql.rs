use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::row::Row;
use crate::database::traits::database_backend::DatabaseBackend;
use async_trait::async_trait;
use log::{error, info};
use sqlx::mysql::{MySqlArguments, MySqlConnectOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, ConnectOptions, Connection, Executor, MySql, MySqlConnection, Row as SqlxRow, TypeInfo, ValueRef};
use std::time::Duration;

const ENGINE: DatabaseDrivers = DatabaseDrivers::mysql;
const LOG_PREFIX: &str = "[MySQL]";

impl DatabaseConnectorMySQL {
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnectorMySQL, DatabaseError> {
        config.validate(ENGINE)?;
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        match options.connect().await {
            Ok(connection) => {
                info!("{} Connected to {}:{}/{}", LOG_PREFIX, config.host, config.port, config.name);
                Ok(DatabaseConnectorMySQL { connection: Some(connection) })
            }
            Err(e) => {
                error!("{} Unable to connect to {}:{}/{}", LOG_PREFIX, config.host, config.port, config.name);
                error!("{} Message: {}", LOG_PREFIX, e);
                Err(DatabaseError::ConnectionError(e.to_string()))
            }
        }
    }

    fn connection(&mut self) -> Result<&mut MySqlConnection, DatabaseError> {
        self.connection
            .as_mut()
            .ok_or_else(|| DatabaseError::ConnectionError(format!("{} connection is closed", LOG_PREFIX)))
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorMySQL {
    fn engine(&self) -> DatabaseDrivers {
        ENGINE
    }

    async fn begin(&mut self) -> Result<(), DatabaseError> {
        Executor::execute(self.connection()?, "BEGIN").await?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), DatabaseError> {
        Executor::execute(self.connection()?, "COMMIT").await?;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DatabaseError> {
        Executor::execute(self.connection()?, "ROLLBACK").await?;
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
    mut query: Query<'q, MySql, MySqlArguments>,
    values: &'q [SqlValue],
) -> Query<'q, MySql, MySqlArguments> {
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

fn decode_row(row: &MySqlRow) -> Result<Row, DatabaseError> {
    let columns = row.columns().iter().map(|column| column.name().to_string()).collect();
    let values = (0..row.len())
        .map(|index| decode_value(row, index))
        .collect::<Result<Vec<SqlValue>, DatabaseError>>()?;
    Ok(Row::new(columns, values))
}

// MySQL sends integers at their column width. Signed decoding sign-extends,
// so unsigned columns must go through u64.
fn decode_value(row: &MySqlRow, index: usize) -> Result<SqlValue, DatabaseError> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }
    let type_name = raw.type_info().name().to_string();
    let value = match type_name.as_str() {
        "BOOLEAN" => SqlValue::Bool(row.try_get_unchecked(index)?),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => {
            SqlValue::Int(row.try_get_unchecked(index)?)
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED" => {
            let unsigned: u64 = row.try_get_unchecked(index)?;
            SqlValue::Int(unsigned as i64)
        }
        "BIGINT UNSIGNED" => {
            let unsigned: u64 = row.try_get_unchecked(index)?;
            match i64::try_from(unsigned) {
                Ok(value) => SqlValue::Int(value),
                Err(_) => SqlValue::Text(unsigned.to_string()),
            }
        }
        "FLOAT" => SqlValue::Float(row.try_get_unchecked::<f32, _>(index)? as f64),
        "DOUBLE" => SqlValue::Float(row.try_get_unchecked(index)?),
        "DECIMAL" | "CHAR" | "VARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" | "SET" | "JSON" => {
            SqlValue::Text(row.try_get_unchecked(index)?)
        }
        "BINARY" | "VARBINARY" | "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BIT" => {
            SqlValue::Bytes(row.try_get_unchecked(index)?)
        }
        "DATE" => SqlValue::Text(row.try_get_unchecked::<chrono::NaiveDate, _>(index)?.to_string()),
        "DATETIME" | "TIMESTAMP" => {
            SqlValue::Text(row.try_get_unchecked::<chrono::NaiveDateTime, _>(index)?.to_string())
        }
        other => {
            return Err(DatabaseError::StatementError(format!(
                "{} unsupported column type {} at index {}",
                LOG_PREFIX, other, index
            )));
        }
    };
    Ok(value)
}
