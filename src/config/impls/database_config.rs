use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use std::fmt;

impl DatabaseConfig {
    /// Checks that every setting `engine` needs is present.
    pub fn validate(&self, engine: DatabaseDrivers) -> Result<(), DatabaseError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if engine.is_networked() {
            if self.user.trim().is_empty() {
                missing.push("user");
            }
            if self.host.trim().is_empty() {
                missing.push("host");
            }
            if self.port == 0 {
                missing.push("port");
            }
        }
        if !missing.is_empty() {
            return Err(DatabaseError::ConfigurationError(format!(
                "{} requires database {}",
                engine.engine_name(),
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
