//! Dashboard API error types

use thiserror::Error;

/// Errors raised while talking to the NGWAF dashboard API
#[derive(Error, Debug)]
pub enum SigSciError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}
