//! HTTP client for the exercise generator.

use std::time::Duration;

use log::{debug, info};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use logoprint::{EndpointConfig, Error, GenerationRequest, Result};

/// Status and body of a generator response, before interpretation.
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one generation request per call. No retries.
pub struct GeneratorClient {
    http: reqwest::Client,
    config: EndpointConfig,
}

impl GeneratorClient {
    /// Validate the endpoint and build the client.
    ///
    /// Fails with a configuration error before any network activity when the
    /// endpoint is blank or a placeholder.
    pub fn new(config: EndpointConfig, timeout: Option<Duration>) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// POST the request and collect the full response body.
    pub async fn send(&self, request: &GenerationRequest) -> Result<RawResponse> {
        let body = request.to_json()?;
        debug!("POST {} ({} bytes)", self.config.url, body.len());

        let mut builder = self
            .http
            .post(&self.config.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(auth) = self.config.authorization() {
            builder = builder.header(AUTHORIZATION, auth);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        info!("generator answered HTTP {} with {} bytes", status, body.len());
        Ok(RawResponse { status, body })
    }
}
