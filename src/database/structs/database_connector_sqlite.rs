use sqlx::SqliteConnection;

pub struct DatabaseConnectorSQLite {
    pub(crate) connection: Option<SqliteConnection>,
}
