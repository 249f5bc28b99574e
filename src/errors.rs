// Error handling module for the Coreum flash loan CLI
// Provides structured error types for configuration loading and output

use thiserror::Error;

/// Core error type for the flash loan CLI
#[derive(Debug, Error)]
pub enum FlashLoanError {
    #[error("I/O error: {0}")]
    IOError(#[from] IOError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<std::io::Error> for FlashLoanError {
    fn from(error: std::io::Error) -> Self {
        FlashLoanError::OutputError(error.to_string())
    }
}

impl From<serde_json::Error> for FlashLoanError {
    fn from(error: serde_json::Error) -> Self {
        FlashLoanError::IOError(IOError::Serialization(error.to_string()))
    }
}

/// Input/output error types
#[derive(Debug, Error)]
pub enum IOError {
    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Errors raised while selecting settings out of a loaded configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Network '{0}' not found in configuration")]
    NetworkNotFound(String),
}

/// Result type alias for flash loan CLI operations
pub type FlashLoanResult<T> = Result<T, FlashLoanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_not_found_message() {
        let err: FlashLoanError = ConfigError::NetworkNotFound("localnet".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Network 'localnet' not found in configuration"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FlashLoanError::from(parse_err);
        assert!(matches!(err, FlashLoanError::IOError(IOError::Serialization(_))));
    }
}
