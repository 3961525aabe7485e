use serde::{Deserialize, Serialize};

/// Connection parameters handed to a backend connector as-is.
///
/// For SQLite, `name` is the database file (or `:memory:`) and the other
/// fields are ignored.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub name: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
}
