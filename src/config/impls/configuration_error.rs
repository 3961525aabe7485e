use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::InvalidEnvironment(e) => write!(f, "invalid environment: {}", e),
            ConfigurationError::InvalidValue(e) => write!(f, "invalid value: {}", e),
            ConfigurationError::LoggingError(e) => write!(f, "logging setup failed: {}", e),
        }
    }
}

impl std::error::Error for ConfigurationError {}
