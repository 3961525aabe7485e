#![allow(dead_code)]
use sqlx::{Connection, SqliteConnection};
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use tempfile::TempDir;
use crud_gateway::config::structs::database_config::DatabaseConfig;
use crud_gateway::gateway::structs::backend_factory::BackendFactory;
use crud_gateway::gateway::structs::crud_gateway::CrudGateway;

pub const EMPLOYEES_SCHEMA: &str = "CREATE TABLE employees (\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    first_name TEXT NOT NULL, \
    last_name TEXT, \
    salary INTEGER NOT NULL DEFAULT 0)";

/// A SQLite database file that lives as long as the returned directory.
pub struct TestDatabase {
    pub dir: TempDir,
    pub config: DatabaseConfig,
}

impl TestDatabase {
    pub async fn new() -> TestDatabase {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("crud.db");
        let config = DatabaseConfig {
            name: path.to_str().expect("utf-8 path").to_string(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            port: 0,
        };
        let database = TestDatabase { dir, config };
        let mut connection = database.connect().await;
        sqlx::raw_sql(EMPLOYEES_SCHEMA)
            .execute(&mut connection)
            .await
            .expect("create employees table");
        connection.close().await.expect("close setup connection");
        database
    }

    /// A second, independent connection to the same file.
    pub async fn connect(&self) -> SqliteConnection {
        let options = SqliteConnectOptions::from_str(&self.config.name)
            .expect("sqlite options")
            .create_if_missing(true);
        SqliteConnection::connect_with(&options).await.expect("sqlite connection")
    }

    pub async fn gateway(&self) -> CrudGateway {
        BackendFactory::default()
            .create_gateway("sqlite", &self.config)
            .await
            .expect("sqlite gateway")
    }

    pub async fn count_employees(&self) -> i64 {
        let mut connection = self.connect().await;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&mut connection)
            .await
            .expect("count employees");
        connection.close().await.expect("close count connection");
        count
    }
}
