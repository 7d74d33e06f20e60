use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("{} is not a readable file.", .0.display())]
    UnreadablePath(PathBuf),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SelectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_path_message() {
        let err = SelectionError::UnreadablePath(PathBuf::from("/root/secret"));
        assert_eq!(err.to_string(), "/root/secret is not a readable file.");
    }

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("tick_rate_ms must be 1-10000".into());
        assert!(err.to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let err: SelectionError = config_err.into();
        assert!(matches!(err, SelectionError::Config(_)));
    }
}
