use crate::database::enums::crud_operation::CrudOperation;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::column_value_pair::ColumnValuePair;
use crate::database::structs::row::Row;
use crate::database::structs::sql_fragment::SqlFragment;
use crate::database::structs::statement_builder::StatementBuilder;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::gateway::enums::gateway_state::GatewayState;
use crate::gateway::structs::crud_gateway::CrudGateway;
use log::{debug, error, info, warn};

const LOG_PREFIX: &str = "[Gateway]";

impl CrudGateway {
    pub fn new(backend_id: impl Into<String>, backend: Box<dyn DatabaseBackend>) -> CrudGateway {
        CrudGateway {
            backend_id: backend_id.into(),
            builder: StatementBuilder::new(backend.engine()),
            state: GatewayState::Open(backend),
        }
    }

    pub fn backend_id(&self) -> &str {
        &self.backend_id
    }

    pub fn engine(&self) -> DatabaseDrivers {
        self.builder.engine
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, GatewayState::Open(_))
    }

    fn backend(&mut self, operation: CrudOperation) -> Result<&mut dyn DatabaseBackend, DatabaseError> {
        match &mut self.state {
            GatewayState::Open(backend) => Ok(backend.as_mut()),
            GatewayState::Closed => {
                warn!("{} Refusing to {} on closed {} gateway", LOG_PREFIX, operation, self.backend_id);
                Err(DatabaseError::NotOpen(operation))
            }
        }
    }

    /// Inserts one row. Values are bound in the order of `pairs`.
    pub async fn create(&mut self, table: &str, pairs: &[ColumnValuePair]) -> Result<(), DatabaseError> {
        let builder = self.builder;
        let backend = self.backend(CrudOperation::Create)?;
        let statement = builder.build_insert(table, pairs)?;
        let affected = execute_in_transaction(backend, &statement.sql, &statement.values)
            .await
            .map_err(|e| e.with_context(CrudOperation::Create, table))?;
        debug!("{} Inserted {} row(s) into {}", LOG_PREFIX, affected, table);
        Ok(())
    }

    /// Returns every row of `table` matching `condition`, or all rows without one.
    pub async fn read(&mut self, table: &str, condition: Option<&SqlFragment>) -> Result<Vec<Row>, DatabaseError> {
        let builder = self.builder;
        let backend = self.backend(CrudOperation::Read)?;
        let sql = builder.build_select(table, condition);
        let rows = backend
            .fetch_all(&sql, &[])
            .await
            .map_err(|e| e.with_context(CrudOperation::Read, table))?;
        debug!("{} Read {} row(s) from {}", LOG_PREFIX, rows.len(), table);
        Ok(rows)
    }

    /// Applies `set_clause` to matching rows. Matching nothing is not an error.
    pub async fn update(&mut self, table: &str, set_clause: &SqlFragment, condition: &SqlFragment) -> Result<(), DatabaseError> {
        let builder = self.builder;
        let backend = self.backend(CrudOperation::Update)?;
        let sql = builder.build_update(table, set_clause, condition);
        let affected = execute_in_transaction(backend, &sql, &[])
            .await
            .map_err(|e| e.with_context(CrudOperation::Update, table))?;
        debug!("{} Updated {} row(s) in {}", LOG_PREFIX, affected, table);
        Ok(())
    }

    /// Deletes matching rows. Matching nothing is not an error.
    pub async fn delete(&mut self, table: &str, condition: &SqlFragment) -> Result<(), DatabaseError> {
        let builder = self.builder;
        let backend = self.backend(CrudOperation::Delete)?;
        let sql = builder.build_delete(table, condition);
        let affected = execute_in_transaction(backend, &sql, &[])
            .await
            .map_err(|e| e.with_context(CrudOperation::Delete, table))?;
        debug!("{} Deleted {} row(s) from {}", LOG_PREFIX, affected, table);
        Ok(())
    }

    /// Releases the connection. Closing an already closed gateway does nothing.
    ///
    /// The gateway is closed afterwards even when the backend reports an
    /// error; the connection is dropped either way.
    pub async fn close(&mut self) -> Result<(), DatabaseError> {
        match std::mem::replace(&mut self.state, GatewayState::Closed) {
            GatewayState::Open(mut backend) => {
                backend
                    .close()
                    .await
                    .map_err(|e| e.with_context(CrudOperation::Close, &self.backend_id))?;
                info!("{} Closed {} gateway", LOG_PREFIX, self.backend_id);
                Ok(())
            }
            GatewayState::Closed => {
                debug!("{} {} gateway already closed", LOG_PREFIX, self.backend_id);
                Ok(())
            }
        }
    }
}

impl Drop for CrudGateway {
    fn drop(&mut self) {
        if self.is_open() {
            warn!("{} {} gateway dropped without close, releasing connection", LOG_PREFIX, self.backend_id);
        }
    }
}

async fn execute_in_transaction(backend: &mut dyn DatabaseBackend, sql: &str, values: &[SqlValue]) -> Result<u64, DatabaseError> {
    backend.begin().await?;
    let outcome = match backend.execute(sql, values).await {
        Ok(affected) => backend.commit().await.map(|_| affected),
        Err(error) => Err(error),
    };
    if outcome.is_err() {
        if let Err(rollback_error) = backend.rollback().await {
            error!("{} Rollback failed: {}", LOG_PREFIX, rollback_error);
        }
    }
    outcome
}
