use thiserror::Error;

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the facade library
#[derive(Error, Debug)]
pub enum Error {
    /// Errors resolving configuration at construction time
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors related to stream operations
    #[error("Stream error: {0}")]
    Stream(String),

    /// Errors related to table operations
    #[error("Table error: {0}")]
    Table(String),

    /// Errors related to object storage operations
    #[error("Object store error: {0}")]
    ObjectStore(String),

    /// Errors related to queue operations
    #[error("Queue error: {0}")]
    Queue(String),

    /// Errors related to topic operations
    #[error("Topic error: {0}")]
    Topic(String),

    /// Errors related to JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
