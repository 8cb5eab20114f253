//! Error types for libbrowser
//!
//! The store, reducer and tip selector are infallible. Errors only arise
//! while loading configuration or installing the global log subscriber.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Could not determine the user configuration directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts_into_browser_error() {
        let error: BrowserError = ConfigError::NoConfigDir.into();
        assert!(matches!(error, BrowserError::Config(ConfigError::NoConfigDir)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Could not determine the user configuration directory"
        );
    }

    #[test]
    fn test_error_display_messages() {
        let error = BrowserError::Config(ConfigError::MissingField("logging.level".to_string()));
        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: logging.level"
        );

        let error = BrowserError::InvalidInput("unknown log format".to_string());
        assert_eq!(error.to_string(), "Invalid input: unknown log format");

        let error = BrowserError::Logging("a global subscriber is already set".to_string());
        assert_eq!(
            error.to_string(),
            "Logging error: a global subscriber is already set"
        );
    }

    #[test]
    fn test_io_error_converts_into_config_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: ConfigError = io.into();
        assert!(error.to_string().starts_with("Failed to read config file"));
    }
}
