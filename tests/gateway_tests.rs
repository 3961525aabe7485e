mod common;

use common::TestDatabase;
use crud_gateway::config::structs::database_config::DatabaseConfig;
use crud_gateway::database::enums::crud_operation::CrudOperation;
use crud_gateway::database::enums::database_drivers::DatabaseDrivers;
use crud_gateway::database::enums::sql_value::SqlValue;
use crud_gateway::database::errors::DatabaseError;
use crud_gateway::database::structs::column_value_pair::ColumnValuePair;
use crud_gateway::database::structs::sql_fragment::SqlFragment;
use crud_gateway::gateway::structs::backend_factory::BackendFactory;
use sqlx::Connection;

fn jane() -> Vec<ColumnValuePair> {
    vec![
        ColumnValuePair::new("first_name", "Jane"),
        ColumnValuePair::new("last_name", "Doe"),
        ColumnValuePair::new("salary", 50000),
    ]
}

#[tokio::test]
async fn test_employee_round_trip() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;
    assert_eq!(gateway.engine(), DatabaseDrivers::sqlite3);

    gateway.create("employees", &jane()).await.unwrap();

    let condition = SqlFragment::raw("first_name='Jane'");
    let rows = gateway.read("employees", Some(&condition)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("first_name"), Some(&SqlValue::Text("Jane".to_string())));
    assert_eq!(rows[0].get("salary"), Some(&SqlValue::Int(50000)));
    assert!(rows[0].contains(&SqlValue::Int(50000)));

    gateway
        .update("employees", &SqlFragment::raw("salary = 60000"), &condition)
        .await
        .unwrap();
    let rows = gateway.read("employees", Some(&condition)).await.unwrap();
    assert_eq!(rows[0].get("salary"), Some(&SqlValue::Int(60000)));

    gateway.delete("employees", &condition).await.unwrap();
    assert!(gateway.read("employees", Some(&condition)).await.unwrap().is_empty());

    gateway.close().await.unwrap();
}

#[tokio::test]
async fn test_create_is_visible_to_other_connections() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;

    gateway.create("employees", &jane()).await.unwrap();
    assert_eq!(database.count_employees().await, 1);

    gateway.close().await.unwrap();
}

#[tokio::test]
async fn test_read_without_condition_returns_all_rows() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;

    gateway.create("employees", &jane()).await.unwrap();
    gateway
        .create("employees", &[ColumnValuePair::new("first_name", "John"), ColumnValuePair::new("last_name", SqlValue::Null)])
        .await
        .unwrap();

    let rows = gateway.read("employees", None).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("last_name"), Some(&SqlValue::Null));
    assert_eq!(rows[1].get("salary"), Some(&SqlValue::Int(0)));

    gateway.close().await.unwrap();
}

#[tokio::test]
async fn test_zero_match_update_and_delete_succeed() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;
    gateway.create("employees", &jane()).await.unwrap();

    let nobody = SqlFragment::raw("id = 424242");
    gateway
        .update("employees", &SqlFragment::raw("salary = 1"), &nobody)
        .await
        .unwrap();
    gateway.delete("employees", &nobody).await.unwrap();

    assert_eq!(database.count_employees().await, 1);
    gateway.close().await.unwrap();
}

#[tokio::test]
async fn test_failed_create_rolls_back_and_gateway_stays_usable() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;

    let result = gateway
        .create("employees", &[ColumnValuePair::new("salry", 1)])
        .await;
    match result {
        Err(DatabaseError::StatementError(message)) => assert!(message.contains("employees")),
        other => panic!("unexpected result: {:?}", other),
    }

    gateway.create("employees", &jane()).await.unwrap();
    assert_eq!(database.count_employees().await, 1);
    gateway.close().await.unwrap();
}

#[tokio::test]
async fn test_failed_update_changes_nothing() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;
    gateway.create("employees", &jane()).await.unwrap();

    let result = gateway
        .update("employees", &SqlFragment::raw("salary = 1"), &SqlFragment::raw("no_such_column = 1"))
        .await;
    assert!(matches!(result, Err(DatabaseError::StatementError(_))));

    let rows = gateway.read("employees", None).await.unwrap();
    assert_eq!(rows[0].get("salary"), Some(&SqlValue::Int(50000)));
    gateway.close().await.unwrap();
}

#[tokio::test]
async fn test_empty_insert_is_rejected() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;

    let result = gateway.create("employees", &[]).await;
    assert!(matches!(result, Err(DatabaseError::EmptyInsert(_))));
    assert_eq!(database.count_employees().await, 0);
    gateway.close().await.unwrap();
}

#[tokio::test]
async fn test_close_then_crud_is_not_open() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;

    gateway.close().await.unwrap();
    assert!(!gateway.is_open());
    assert!(matches!(
        gateway.create("employees", &jane()).await,
        Err(DatabaseError::NotOpen(CrudOperation::Create))
    ));
    assert!(matches!(
        gateway.read("employees", None).await,
        Err(DatabaseError::NotOpen(CrudOperation::Read))
    ));
    assert!(gateway.close().await.is_ok());
    assert_eq!(database.count_employees().await, 0);
}

#[tokio::test]
async fn test_factory_rejects_unknown_backend() {
    let result = BackendFactory::default()
        .create_gateway("nonexistent", &DatabaseConfig {
            name: "crud".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            host: "127.0.0.1".to_string(),
            port: 5432,
        })
        .await;
    assert!(matches!(result, Err(DatabaseError::UnsupportedBackend(id)) if id == "nonexistent"));
}

#[tokio::test]
async fn test_factory_sqlite_requires_name() {
    let result = BackendFactory::default()
        .create_gateway("sqlite", &DatabaseConfig {
            name: String::new(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            port: 0,
        })
        .await;
    assert!(matches!(result, Err(DatabaseError::ConfigurationError(_))));
}

#[tokio::test]
async fn test_factory_postgresql_unreachable_is_connection_error() {
    let result = BackendFactory::default()
        .create_gateway("postgresql", &DatabaseConfig {
            name: "crud".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "127.0.0.1".to_string(),
            port: 1,
        })
        .await;
    assert!(matches!(result, Err(DatabaseError::ConnectionError(_))));
}

#[tokio::test]
async fn test_factory_postgresql_missing_user_is_configuration_error() {
    let result = BackendFactory::default()
        .create_gateway("postgresql", &DatabaseConfig {
            name: "crud".to_string(),
            user: String::new(),
            password: String::new(),
            host: "127.0.0.1".to_string(),
            port: 5432,
        })
        .await;
    assert!(matches!(result, Err(DatabaseError::ConfigurationError(message)) if message.contains("user")));
}

#[tokio::test]
async fn test_failed_commit_leaves_gateway_usable() {
    let database = TestDatabase::new().await;
    let mut gateway = database.gateway().await;

    let mut reader = database.connect().await;
    sqlx::query("BEGIN").execute(&mut reader).await.unwrap();
    let seen: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(&mut reader)
        .await
        .unwrap();
    assert_eq!(seen, 0);

    let result = gateway.create("employees", &jane()).await;
    assert!(matches!(result, Err(DatabaseError::StatementError(message)) if message.contains("locked")));
    assert!(gateway.read("employees", None).await.unwrap().is_empty());

    sqlx::query("COMMIT").execute(&mut reader).await.unwrap();
    reader.close().await.unwrap();

    gateway.create("employees", &jane()).await.unwrap();
    assert_eq!(database.count_employees().await, 1);
    gateway.close().await.unwrap();
}
