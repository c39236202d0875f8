//! Request transports.
//!
//! [`Transport`] is the one capability the client needs: post a form to a URL
//! and hand back the decoded JSON reply. [`HttpTransport`] is the reqwest
//! implementation used outside of tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

use crate::error::{CoreError, TransportError};

/// Performs one form-encoded POST and returns the JSON reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&'static str, String)],
    ) -> Result<Value, TransportError>;
}

/// Settings for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout. `None` waits as long as the connection does.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("doc-onlook/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| CoreError::Other(format!("HTTP client error: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&'static str, String)],
    ) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(%url, status = status.as_u16(), error = %e, "failed to read error body");
                    String::new()
                }
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(map_reqwest_error)?;

        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_timeout() {
        let config = ClientConfig::default();
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("doc-onlook/"));
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_http_transport_builds() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(1));
        assert!(HttpTransport::new(&config).is_ok());
    }
}
