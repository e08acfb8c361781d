//! Generator endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Endpoint of the exercise generator.
pub const DEFAULT_API_URL: &str =
    "https://magicloops.dev/api/loop/58c97166-933e-4e60-a23a-3d1056aea8c9/run";

/// Marker left in unconfigured endpoint URLs.
const PLACEHOLDER_MARKER: &str = "PASTE_YOUR";

/// Where to send generation requests and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Generator URL
    pub url: String,

    /// Static bearer token, sent only when present and non-empty
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl EndpointConfig {
    /// Create a configuration for the given URL without authentication.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            bearer_token: None,
        }
    }

    /// Set the bearer token. A blank token disables the header.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.bearer_token = if token.trim().is_empty() {
            None
        } else {
            Some(token.trim().to_string())
        };
        self
    }

    /// Value for the `Authorization` header, if a non-blank token is configured.
    pub fn authorization(&self) -> Option<String> {
        self.bearer_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| format!("Bearer {}", token))
    }

    /// Check that the endpoint is usable before any request is made.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the URL is blank or still contains the
    /// placeholder marker.
    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(Error::Config("generator API URL is not set".into()));
        }
        if url.contains(PLACEHOLDER_MARKER) {
            return Err(Error::Config(
                "generator API URL is still a placeholder".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EndpointConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.authorization(), None);
    }

    #[test]
    fn test_blank_url_rejected() {
        let err = EndpointConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_placeholder_url_rejected() {
        let err = EndpointConfig::new("https://example.com/PASTE_YOUR_URL")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("placeholder"));
    }

    #[test]
    fn test_bearer_token() {
        let config = EndpointConfig::default().with_bearer_token("mlp_123");
        assert_eq!(config.authorization().as_deref(), Some("Bearer mlp_123"));

        let config = EndpointConfig::default().with_bearer_token("");
        assert_eq!(config.authorization(), None);
    }

    #[test]
    fn test_blank_token_field_sends_no_header() {
        let config = EndpointConfig {
            bearer_token: Some("  ".to_string()),
            ..EndpointConfig::default()
        };
        assert_eq!(config.authorization(), None);

        let config: EndpointConfig =
            serde_json::from_str(r#"{"url":"https://example.com/run","bearer_token":""}"#)
                .unwrap();
        assert_eq!(config.authorization(), None);
    }
}
