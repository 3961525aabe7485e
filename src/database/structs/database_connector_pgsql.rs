use sqlx::PgConnection;

pub struct DatabaseConnectorPgSQL {
    pub(crate) connection: Option<PgConnection>,
}
