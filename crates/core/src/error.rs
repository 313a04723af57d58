//! Error types shared by the core crate and the dashboard (WASM-compatible)

use thiserror::Error;

/// Result type alias for gitpulse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that work in both native and WASM environments
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response from the backend; carries the HTTP status text.
    #[error("request failed: {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
