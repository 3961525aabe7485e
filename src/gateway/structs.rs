//! Gateway data structures.

/// Single-connection CRUD gateway.
pub mod crud_gateway;

/// Registry from backend identifier to connector constructor.
pub mod backend_factory;
