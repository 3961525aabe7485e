//! Gateway enumeration types.

/// Open/closed state of a gateway's connection.
pub mod gateway_state;
