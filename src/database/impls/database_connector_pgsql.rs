use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::row::Row;
use crate::database::traits::database_backend::DatabaseBackend;
use async_trait::async_trait;
use log::{error, info};
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::types::Oid;
use sqlx::postgres::{PgArgumentBuffer, PgArguments, PgConnectOptions, PgRow, PgTypeInfo};
use sqlx::query::Query;
use sqlx::{Column, ConnectOptions, Connection, PgConnection, Postgres, Row as SqlxRow, Type, TypeInfo, ValueRef};
use std::time::Duration;

const ENGINE: DatabaseDrivers = DatabaseDrivers::pgsql;
const LOG_PREFIX: &str = "[PgSQL]";

impl DatabaseConnectorPgSQL {
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnectorPgSQL, DatabaseError> {
        config.validate(ENGINE)?;
        let options = PgConnectOptions::new()
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
                Ok(DatabaseConnectorPgSQL { connection: Some(connection) })
            }
            Err(e) => {
                error!("{} Unable to connect to {}:{}/{}", LOG_PREFIX, config.host, config.port, config.name);
                error!("{} Message: {}", LOG_PREFIX, e);
                Err(DatabaseError::ConnectionError(e.to_string()))
            }
        }
    }

    fn connection(&mut self) -> Result<&mut PgConnection, DatabaseError> {
        self.connection
            .as_mut()
            .ok_or_else(|| DatabaseError::ConnectionError(format!("{} connection is closed", LOG_PREFIX)))
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorPgSQL {
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
        let result = bind_values(prepare(sql, values), values)
            .execute(self.connection()?)
            .await?;
        Ok(result.rows_affected())
    }

    async fn fetch_all(&mut self, sql: &str, values: &[SqlValue]) -> Result<Vec<Row>, DatabaseError> {
        let rows = bind_values(prepare(sql, values), values)
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

/// A NULL parameter sent with type OID 0, so the server infers the type from
/// the target column instead of assuming text.
struct UntypedNull;

impl Type<Postgres> for UntypedNull {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(Oid(0))
    }
}

impl Encode<'_, Postgres> for UntypedNull {
    fn encode_by_ref(&self, _buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        Ok(IsNull::Yes)
    }
}

// Parameter types inferred for an untyped NULL must not be reused by later
// executions of the same text, so those statements skip the cache.
fn prepare<'q>(sql: &'q str, values: &[SqlValue]) -> Query<'q, Postgres, PgArguments> {
    let cacheable = !values.iter().any(SqlValue::is_null);
    sqlx::query(sql).persistent(cacheable)
}

fn bind_values<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    values: &'q [SqlValue],
) -> Query<'q, Postgres, PgArguments> {
    for value in values {
        query = match value {
            SqlValue::Null => query.bind(UntypedNull),
            SqlValue::Bool(v) => query.bind(*v),
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Float(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Bytes(v) => query.bind(v.as_slice()),
        };
    }
    query
}

fn decode_row(row: &PgRow) -> Result<Row, DatabaseError> {
    let columns = row.columns().iter().map(|column| column.name().to_string()).collect();
    let values = (0..row.len())
        .map(|index| decode_value(row, index))
        .collect::<Result<Vec<SqlValue>, DatabaseError>>()?;
    Ok(Row::new(columns, values))
}

fn decode_value(row: &PgRow, index: usize) -> Result<SqlValue, DatabaseError> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }
    let type_name = raw.type_info().name().to_string();
    let value = match type_name.as_str() {
        "BOOL" => SqlValue::Bool(row.try_get(index)?),
        "INT2" => SqlValue::Int(row.try_get::<i16, _>(index)? as i64),
        "INT4" => SqlValue::Int(row.try_get::<i32, _>(index)? as i64),
        "INT8" => SqlValue::Int(row.try_get(index)?),
        "FLOAT4" => SqlValue::Float(row.try_get::<f32, _>(index)? as f64),
        "FLOAT8" => SqlValue::Float(row.try_get(index)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => SqlValue::Text(row.try_get(index)?),
        "BYTEA" => SqlValue::Bytes(row.try_get(index)?),
        "OID" => SqlValue::Int(row.try_get::<Oid, _>(index)?.0 as i64),
        "NUMERIC" => SqlValue::Text(row.try_get::<sqlx::types::Decimal, _>(index)?.to_string()),
        "UUID" => SqlValue::Text(row.try_get::<sqlx::types::Uuid, _>(index)?.to_string()),
        "JSON" | "JSONB" => SqlValue::Text(row.try_get::<sqlx::types::JsonValue, _>(index)?.to_string()),
        "DATE" => SqlValue::Text(row.try_get::<chrono::NaiveDate, _>(index)?.to_string()),
        "TIME" => SqlValue::Text(row.try_get::<chrono::NaiveTime, _>(index)?.to_string()),
        "TIMESTAMP" => SqlValue::Text(row.try_get::<chrono::NaiveDateTime, _>(index)?.to_string()),
        "TIMESTAMPTZ" => SqlValue::Text(row.try_get::<chrono::DateTime<chrono::Utc>, _>(index)?.to_rfc3339()),
        other => {
            return Err(DatabaseError::StatementError(format!(
                "{} unsupported column type {} at index {}",
                LOG_PREFIX, other, index
            )));
        }
    };
    Ok(value)
}
