use crud_gateway::config::structs::database_config::DatabaseConfig;
use crud_gateway::database::enums::sql_value::SqlValue;
use crud_gateway::database::structs::column_value_pair::ColumnValuePair;
use crud_gateway::database::structs::sql_fragment::SqlFragment;
use crud_gateway::gateway::structs::backend_factory::BackendFactory;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};

/// Connection settings from `MYSQL_*`, or `None` when no server is configured.
fn mysql_config() -> Option<DatabaseConfig> {
    let host = std::env::var("MYSQL_HOST").ok()?;
    Some(DatabaseConfig {
        name: std::env::var("MYSQL_DATABASE").unwrap_or_else(|_| "crud".to_string()),
        user: std::env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string()),
        password: std::env::var("MYSQL_PASSWORD").unwrap_or_default(),
        host,
        port: std::env::var("MYSQL_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(3306),
    })
}

#[tokio::test]
async fn test_mysql_unsigned_columns_keep_their_value() {
    let Some(config) = mysql_config() else {
        eprintln!("MYSQL_HOST not set, skipping");
        return;
    };
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);
    let mut connection = MySqlConnection::connect_with(&options).await.expect("mysql connection");
    sqlx::raw_sql(
        "DROP TABLE IF EXISTS crud_my_unsigned; \
         CREATE TABLE crud_my_unsigned (\
         id INT AUTO_INCREMENT PRIMARY KEY, \
         level TINYINT UNSIGNED, \
         quota INT UNSIGNED, \
         note VARCHAR(32))",
    )
    .execute(&mut connection)
    .await
    .expect("create table");
    connection.close().await.expect("close setup connection");

    let mut gateway = BackendFactory::default()
        .create_gateway("mysql", &config)
        .await
        .expect("mysql gateway");
    gateway
        .create("crud_my_unsigned", &[
            ColumnValuePair::new("level", 255),
            ColumnValuePair::new("quota", 4294967295i64),
            ColumnValuePair::new("note", SqlValue::Null),
        ])
        .await
        .unwrap();

    let rows = gateway
        .read("crud_my_unsigned", Some(&SqlFragment::raw("level = 255")))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("level"), Some(&SqlValue::Int(255)));
    assert_eq!(rows[0].get("quota"), Some(&SqlValue::Int(4294967295)));
    assert_eq!(rows[0].get("note"), Some(&SqlValue::Null));
    gateway.close().await.unwrap();
}
