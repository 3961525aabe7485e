use crate::database::enums::database_drivers::DatabaseDrivers;
use std::fmt;

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::sqlite3 => write!(f, "sqlite3"),
            DatabaseDrivers::mysql => write!(f, "mysql"),
            DatabaseDrivers::pgsql => write!(f, "pgsql"),
        }
    }
}

impl DatabaseDrivers {
    /// Bind placeholder for the 1-based parameter `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => "?".to_string(),
            DatabaseDrivers::pgsql => format!("${}", index),
        }
    }

    pub fn engine_name(&self) -> &'static str {
        match self {
            DatabaseDrivers::sqlite3 => "SQLite",
            DatabaseDrivers::mysql => "MySQL",
            DatabaseDrivers::pgsql => "PgSQL",
        }
    }

    /// SQLite works on a file path; the others need a server to talk to.
    pub fn is_networked(&self) -> bool {
        !matches!(self, DatabaseDrivers::sqlite3)
    }
}
