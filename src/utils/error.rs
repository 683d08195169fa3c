use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpoError {
    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("GraphQL backend error: {message}")]
    RemoteError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

pub type Result<T> = std::result::Result<T, ExpoError>;
