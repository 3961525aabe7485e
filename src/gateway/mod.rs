//! CRUD gateway and backend factory.
//!
//! A [`CrudGateway`](structs::crud_gateway::CrudGateway) owns exactly one
//! backend connection for its whole life and exposes create, read, update,
//! delete and close. The
//! [`BackendFactory`](structs::backend_factory::BackendFactory) maps backend
//! identifiers to connector constructors; adding a backend means registering
//! another constructor, never touching the dispatch.
//!
//! # Lifecycle
//!
//! A gateway is only handed out once its connection is open. `close` moves it
//! to the closed state and releases the connection; every CRUD call after
//! that fails with `DatabaseError::NotOpen` without touching the backend.
//!
//! # Transactions
//!
//! Writes run inside `BEGIN ... COMMIT`. A failing statement is rolled back
//! before its error is returned. Updates and deletes that match no rows still
//! commit and report success.
//!
//! # Concurrency
//!
//! All operations take `&mut self`, so a gateway serves one caller at a time.
//! Callers that need parallelism create one gateway per task.
//!
//! # Example
//!
//! ```rust,ignore
//! use crud_gateway::database::structs::sql_fragment::SqlFragment;
//! use crud_gateway::gateway::structs::backend_factory::BackendFactory;
//!
//! let factory = BackendFactory::default();
//! let mut gateway = factory.create_gateway("postgresql", &config.database).await?;
//! gateway.create("employees", &[("first_name", "Jane").into(), ("salary", 50000).into()]).await?;
//! let rows = gateway.read("employees", Some(&SqlFragment::raw("first_name='Jane'"))).await?;
//! gateway.close().await?;
//! ```

/// Gateway enumerations (connection state).
pub mod enums;

/// Implementation blocks for the gateway and the factory.
pub mod impls;

/// Gateway and factory data structures.
pub mod structs;

/// Type aliases shared by the factory.
pub mod types;
