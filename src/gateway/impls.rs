//! Implementation blocks for the gateway and the factory.

/// CrudGateway implementation: CRUD operations, close, drop.
pub mod crud_gateway;

/// BackendFactory implementation: registration and dispatch.
pub mod backend_factory;
