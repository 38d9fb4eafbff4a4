use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid backend url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Backend answered {status} for {url}")]
    Status { status: StatusCode, url: String },
}
