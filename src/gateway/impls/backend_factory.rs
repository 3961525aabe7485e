use crate::config::structs::database_config::DatabaseConfig;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::gateway::structs::backend_factory::BackendFactory;
use crate::gateway::structs::crud_gateway::CrudGateway;
use crate::gateway::types::BackendFuture;
use futures_util::FutureExt;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

const LOG_PREFIX: &str = "[Factory]";

impl BackendFactory {
    /// A factory with nothing registered.
    pub fn new() -> BackendFactory {
        BackendFactory { constructors: BTreeMap::new() }
    }

    /// A factory knowing `postgresql`, `mysql` and `sqlite`.
    pub fn with_defaults() -> BackendFactory {
        let mut factory = BackendFactory::new();
        factory.register("postgresql", connect_pgsql);
        factory.register("mysql", connect_mysql);
        factory.register("sqlite", connect_sqlite);
        factory
    }

    /// Registers `constructor` under `backend_id`, replacing any previous entry.
    pub fn register<F>(&mut self, backend_id: &str, constructor: F)
    where
        F: Fn(DatabaseConfig) -> BackendFuture + Send + Sync + 'static,
    {
        if self.constructors.insert(backend_id.to_string(), Arc::new(constructor)).is_some() {
            debug!("{} Replaced constructor for {}", LOG_PREFIX, backend_id);
        }
    }

    pub fn is_registered(&self, backend_id: &str) -> bool {
        self.constructors.contains_key(backend_id)
    }

    pub fn backends(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Opens a gateway on the backend registered as `backend_id`.
    ///
    /// Unknown identifiers fail before any connection is attempted.
    pub async fn create_gateway(&self, backend_id: &str, config: &DatabaseConfig) -> Result<CrudGateway, DatabaseError> {
        let Some(constructor) = self.constructors.get(backend_id) else {
            warn!("{} Unsupported backend {}, known: {}", LOG_PREFIX, backend_id, self.backends().join(", "));
            return Err(DatabaseError::UnsupportedBackend(backend_id.to_string()));
        };
        info!("{} Opening {} gateway", LOG_PREFIX, backend_id);
        let backend = constructor(config.clone()).await?;
        Ok(CrudGateway::new(backend_id, backend))
    }
}

impl Default for BackendFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn connect_pgsql(config: DatabaseConfig) -> BackendFuture {
    async move {
        let connector = DatabaseConnectorPgSQL::connect(&config).await?;
        Ok(Box::new(connector) as Box<dyn DatabaseBackend>)
    }
    .boxed()
}

fn connect_mysql(config: DatabaseConfig) -> BackendFuture {
    async move {
        let connector = DatabaseConnectorMySQL::connect(&config).await?;
        Ok(Box::new(connector) as Box<dyn DatabaseBackend>)
    }
    .boxed()
}

fn connect_sqlite(config: DatabaseConfig) -> BackendFuture {
    async move {
        let connector = DatabaseConnectorSQLite::connect(&config).await?;
        Ok(Box::new(connector) as Box<dyn DatabaseBackend>)
    }
    .boxed()
}
