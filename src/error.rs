use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Client error: {0}")]
    ClientError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Client action error: {0}")]
    ClientActionError(String),
}

impl StudioError {
    /// The user-facing text of the error, without the category prefix.
    pub fn notice(&self) -> &str {
        match self {
            StudioError::ConfigError(msg)
            | StudioError::ClientError(msg)
            | StudioError::ValidationError(msg)
            | StudioError::RequestError(msg)
            | StudioError::ResponseError(msg)
            | StudioError::ClientActionError(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
