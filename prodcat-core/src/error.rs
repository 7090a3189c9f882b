/// Structured error types for prodcat-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (prodcat-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use thiserror::Error;

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable '{var}'")]
    MissingEnv { var: &'static str },

    /// Environment variable is present but unusable
    #[error("Invalid value for environment variable '{var}': {reason}")]
    InvalidEnv { var: &'static str, reason: String },
}

/// Result type alias for prodcat-core operations
pub type Result<T> = std::result::Result<T, ConfigError>;
