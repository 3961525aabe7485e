use crate::database::enums::crud_operation::CrudOperation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Unsupported backend: {0}")]
    UnsupportedBackend(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Statement error: {0}")]
    StatementError(String),

    #[error("Gateway is not open, unable to {0}")]
    NotOpen(CrudOperation),

    #[error("Insert into {0} requires at least one column")]
    EmptyInsert(String),
}

impl DatabaseError {
    /// Prefixes backend messages with the operation and table they came from.
    /// Other variants already name their subject and are returned unchanged.
    pub fn with_context(self, operation: CrudOperation, table: &str) -> Self {
        match self {
            DatabaseError::ConnectionError(message) => {
                DatabaseError::ConnectionError(format!("{} {}: {}", operation, table, message))
            }
            DatabaseError::StatementError(message) => {
                DatabaseError::StatementError(format!("{} {}: {}", operation, table, message))
            }
            other => other,
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Configuration(e) => DatabaseError::ConfigurationError(e.to_string()),
            sqlx::Error::Database(e) => DatabaseError::StatementError(e.message().to_string()),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DatabaseError::ConnectionError(error.to_string()),
            other => DatabaseError::StatementError(other.to_string()),
        }
    }
}
