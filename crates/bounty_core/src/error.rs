use thiserror::Error;

/// Why a page load failed. The `Display` text is what the cache shows as its error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status} {status_text}")]
    Server { status: u16, status_text: String },
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}
