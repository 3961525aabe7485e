#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use std::collections::HashMap;

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.backend, "postgresql");
            assert_eq!(config.database.port, 5432);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_load_from_toml() {
            let data = br#"
log_level = "debug"
backend = "sqlite"

[database]
name = ":memory:"
"#;
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.backend, "sqlite");
            assert_eq!(config.database.name, ":memory:");
            assert_eq!(config.database.user, "");
            assert_eq!(config.database.port, 0);
        }

        #[test]
        fn test_load_rejects_missing_database() {
            let data = br#"
log_level = "info"
backend = "postgresql"
"#;
            assert!(Configuration::load(data).is_err());
        }

        #[test]
        fn test_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(config, parsed);
        }

        #[test]
        fn test_validate_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = "verbose".to_string();
            assert!(matches!(config.validate(), Err(ConfigurationError::InvalidValue(_))));
        }

        #[test]
        fn test_validate_backend_identifier() {
            let mut config = Configuration::init();
            config.backend = "Postgre SQL".to_string();
            assert!(matches!(config.validate(), Err(ConfigurationError::InvalidValue(_))));
        }

        #[test]
        fn test_overrides_replace_connection_settings() {
            let env: HashMap<&str, &str> = HashMap::from([
                ("DB_NAME", "company"),
                ("DB_USER", "jane"),
                ("DB_PASSWORD", "secret"),
                ("DB_HOST", "db.internal"),
                ("DB_PORT", "6543"),
            ]);
            let mut config = Configuration::init();
            config.apply_overrides(|key| env.get(key).map(|v| v.to_string())).unwrap();
            assert_eq!(config.database.name, "company");
            assert_eq!(config.database.user, "jane");
            assert_eq!(config.database.password, "secret");
            assert_eq!(config.database.host, "db.internal");
            assert_eq!(config.database.port, 6543);
        }

        #[test]
        fn test_overrides_keep_unset_fields() {
            let mut config = Configuration::init();
            config.apply_overrides(|_| None).unwrap();
            assert_eq!(config, Configuration::init());
        }

        #[test]
        fn test_overrides_reject_bad_port() {
            let mut config = Configuration::init();
            let result = config.apply_overrides(|key| (key == "DB_PORT").then(|| "fivefourthreetwo".to_string()));
            assert!(matches!(result, Err(ConfigurationError::InvalidEnvironment(_))));
        }

        #[test]
        fn test_load_from_file_creates_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            let config = Configuration::load_from_file(path, true).unwrap();
            assert_eq!(config, Configuration::init());
            assert!(std::path::Path::new(path).exists());
        }

        #[test]
        fn test_load_from_file_missing_without_create() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let result = Configuration::load_from_file(path.to_str().unwrap(), false);
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_load_from_file_reports_parse_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "log_level = [").unwrap();
            let result = Configuration::load_from_file(path.to_str().unwrap(), true);
            assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
        }
    }

    mod database_config_tests {
        use crate::config::structs::database_config::DatabaseConfig;
        use crate::database::enums::database_drivers::DatabaseDrivers;
        use crate::database::errors::DatabaseError;

        fn network_config() -> DatabaseConfig {
            DatabaseConfig {
                name: "crud".to_string(),
                user: "postgres".to_string(),
                password: "hunter2".to_string(),
                host: "localhost".to_string(),
                port: 5432,
            }
        }

        #[test]
        fn test_validate_complete_network_config() {
            assert!(network_config().validate(DatabaseDrivers::pgsql).is_ok());
            assert!(network_config().validate(DatabaseDrivers::mysql).is_ok());
        }

        #[test]
        fn test_validate_lists_missing_fields() {
            let mut config = network_config();
            config.user = String::new();
            config.port = 0;
            match config.validate(DatabaseDrivers::pgsql) {
                Err(DatabaseError::ConfigurationError(message)) => {
                    assert!(message.contains("user"));
                    assert!(message.contains("port"));
                    assert!(!message.contains("host"));
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[test]
        fn test_validate_sqlite_needs_only_name() {
            let config = DatabaseConfig {
                name: ":memory:".to_string(),
                user: String::new(),
                password: String::new(),
                host: String::new(),
                port: 0,
            };
            assert!(config.validate(DatabaseDrivers::sqlite3).is_ok());
            assert!(config.validate(DatabaseDrivers::pgsql).is_err());
        }

        #[test]
        fn test_debug_redacts_password() {
            let debug_str = format!("{:?}", network_config());
            assert!(!debug_str.contains("hunter2"));
            assert!(debug_str.contains("<redacted>"));
        }
    }
}
