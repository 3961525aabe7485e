use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            backend: String::from("postgresql"),
            database: DatabaseConfig {
                name: String::from("crud"),
                user: String::from("postgres"),
                password: String::new(),
                host: String::from("127.0.0.1"),
                port: 5432,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads `path`, or with `create` set writes the defaults there first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(ConfigurationError::IOError(error)) if create && error.kind() == std::io::ErrorKind::NotFound => {
                eprintln!("No config file found at {}, creating one with defaults..", path);
                let config = Configuration::init();
                let config_toml = toml::to_string(&config).map_err(ConfigurationError::SerializeError)?;
                Configuration::save_file(path, config_toml)?;
                config
            }
            Err(error) => return Err(error),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(&self.log_level)?;
        let backend_check = Regex::new(r"^[a-z][a-z0-9_]{0,30}$").map_err(|e| ConfigurationError::InvalidValue(e.to_string()))?;
        if !backend_check.is_match(&self.backend) {
            return Err(ConfigurationError::InvalidValue(format!(
                "backend '{}' does not match {}",
                self.backend, backend_check
            )));
        }
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigurationError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overrides the connection settings from `DB_NAME`, `DB_USER`,
    /// `DB_PASSWORD`, `DB_HOST` and `DB_PORT` as resolved by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("DB_NAME") {
            self.database.name = name;
        }
        if let Some(user) = lookup("DB_USER") {
            self.database.user = user;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            self.database.password = password;
        }
        if let Some(host) = lookup("DB_HOST") {
            self.database.host = host;
        }
        if let Some(port) = lookup("DB_PORT") {
            self.database.port = port.trim().parse::<u16>().map_err(|_| {
                ConfigurationError::InvalidEnvironment(format!("DB_PORT '{}' is not a valid port", port))
            })?;
        }
        Ok(())
    }
}
