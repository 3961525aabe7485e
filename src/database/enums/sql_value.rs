use serde::Serialize;

/// A single scalar handed to or read back from the backend.
///
/// Serializes untagged, so a row of values renders as a plain JSON array.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}
