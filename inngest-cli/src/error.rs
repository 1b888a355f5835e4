use reqwest::StatusCode;
use thiserror::Error;

/// Runtime failures carry their own `Error: ` prefix; `main` prints them as-is.
/// `InvalidWindow` is only ever shown inside clap's usage error.
#[derive(Debug, Error)]
pub enum InngestError {
    #[error("Error: {var} environment variable not set")]
    MissingApiKey { var: &'static str },
    #[error("--since must be in format {{int}}m, got '{0}'")]
    InvalidWindow(String),
    #[error("Error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error: {status} for url: {url}")]
    Http { status: StatusCode, url: String },
    #[error("Error: malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}
