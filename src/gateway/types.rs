use crate::config::structs::database_config::DatabaseConfig;
use crate::database::errors::DatabaseError;
use crate::database::traits::database_backend::DatabaseBackend;
use futures_util::future::BoxFuture;
use std::sync::Arc;

pub type BackendFuture = BoxFuture<'static, Result<Box<dyn DatabaseBackend>, DatabaseError>>;

/// Opens one backend connection from the given settings.
pub type BackendConstructor = Arc<dyn Fn(DatabaseConfig) -> BackendFuture + Send + Sync>;
