use thiserror::Error;

/// Custom error types for hinter
#[derive(Debug, Error)]
pub enum HinterError {
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
