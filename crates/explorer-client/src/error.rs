/// Client-specific result type
pub type Result<T> = std::result::Result<T, ExplorerClientError>;

/// Errors from the explorer client
#[derive(Debug, thiserror::Error)]
pub enum ExplorerClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("{status} {error_type}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error type identifier
        error_type: String,
        /// Human-readable error message
        message: String,
    },

    /// Failed to parse response
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
