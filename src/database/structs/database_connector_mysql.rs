use sqlx::MySqlConnection;

pub struct DatabaseConnectorMySQL {
    pub(crate) connection: Option<MySqlConnection>,
}
