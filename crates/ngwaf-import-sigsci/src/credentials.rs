//! Dashboard API credentials

use serde::Deserialize;

/// Email/token pair for the dashboard API
///
/// Create a token at: https://dashboard.signalsciences.net/ (My Profile > API Access Tokens)
#[derive(Clone, Deserialize)]
pub struct SigSciCredentials {
    /// Email address of the user that owns the token
    pub email: String,
    /// API access token
    pub token: String,
}

impl SigSciCredentials {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for SigSciCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigSciCredentials")
            .field("email", &self.email)
            .field("token", &"***REDACTED***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let creds = SigSciCredentials::new("ops@example.com", "s3cr3t");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("ops@example.com"));
        assert!(!debug.contains("s3cr3t"));
    }
}
