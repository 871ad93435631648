//! NGWAF dashboard API client
//!
//! Read-only: only `GET` listing endpoints are ever called. Each call is made
//! exactly once; retries are left to the operator re-running the tool.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::credentials::SigSciCredentials;
use crate::errors::SigSciError;
use crate::models::DataResponse;

pub const DEFAULT_API_URL: &str = "https://dashboard.signalsciences.net/api/v0";

/// Longest response excerpt carried in a parse error
const BODY_EXCERPT_CHARS: usize = 200;

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Error payload returned by the dashboard API
#[derive(Debug, Deserialize)]
struct SigSciErrorResponse {
    message: String,
}

/// Authenticated client for the dashboard API
pub struct SigSciClient {
    client: Client,
    credentials: SigSciCredentials,
    base_url: String,
}

impl SigSciClient {
    /// Create a client against the public dashboard API
    pub fn new(credentials: SigSciCredentials) -> Result<Self, SigSciError> {
        Self::with_base_url(credentials, DEFAULT_API_URL)
    }

    /// Create a client with a custom base URL (private deployments, tests)
    pub fn with_base_url(
        credentials: SigSciCredentials,
        base_url: impl Into<String>,
    ) -> Result<Self, SigSciError> {
        if credentials.email.is_empty() || credentials.token.is_empty() {
            return Err(SigSciError::InvalidCredentials(
                "email and token are required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(concat!("ngwaf-import/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SigSciError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a listing endpoint and return its `data` array
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, SigSciError> {
        let url = format!("{}{}", self.base_url, path);

        debug!("NGWAF API request: GET {}", path);

        let response = self
            .client
            .get(&url)
            .header("x-api-user", &self.credentials.email)
            .header("x-api-token", &self.credentials.token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<SigSciErrorResponse>(&error_body)
                .map(|e| e.message)
                .unwrap_or_else(|_| excerpt(&error_body));
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    SigSciError::InvalidCredentials(format!("{}: {}", status, message))
                }
                StatusCode::NOT_FOUND => SigSciError::NotFound(format!("{}: {}", path, message)),
                StatusCode::TOO_MANY_REQUESTS => SigSciError::RateLimited(message),
                _ => SigSciError::ApiError(format!("API returned status {}: {}", status, message)),
            });
        }

        let response_text = response.text().await?;

        let parsed: DataResponse<T> = serde_json::from_str(&response_text).map_err(|e| {
            SigSciError::Parse(format!("{} - Body: {}", e, excerpt(&response_text)))
        })?;

        debug!("NGWAF API response: {} items from {}", parsed.data.len(), path);
        if let Some(total) = parsed.total_count {
            if total > parsed.data.len() as u64 {
                warn!(
                    "{} reports {} objects but returned {}; listing may be truncated",
                    path,
                    total,
                    parsed.data.len()
                );
            }
        }
        Ok(parsed.data)
    }
}
