//! HTTP client for the Twilio Messages API.
//!
//! This module provides a synchronous HTTP client built on `ureq`. Each call to
//! [`TwilioClient::send_message`] is exactly one blocking `POST`; there are no
//! retries. Responses are classified into success or a [`ProviderError`].

use crate::config::{Config, ProviderCredentials};
use crate::domain::PhoneNumber;
use crate::error::{ProviderError, ProviderResult};
use crate::metrics::Metrics;
use base64::Engine as _;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The JSON object returned for an accepted message.
///
/// Only its shape is checked; fields are not interpreted.
pub type MessageResource = serde_json::Map<String, serde_json::Value>;

/// Anything that can deliver one message to one number.
///
/// The dispatcher is generic over this so tests can substitute a recording
/// implementation for the HTTP client.
pub trait MessageSender {
    /// Send `body` to `to`, blocking until the provider answers.
    fn send_message(&self, to: &PhoneNumber, body: &str) -> ProviderResult<MessageResource>;
}

/// HTTP client for the Twilio Messages API.
#[derive(Clone)]
pub struct TwilioClient {
    /// Base URL for the API (no trailing path)
    base_url: String,

    /// Account, auth pair and sender number
    credentials: ProviderCredentials,

    /// Precomputed `Authorization` header value
    auth_header: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl TwilioClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.twilio.api_base_url.clone(),
            config.credentials(),
            Duration::from_secs(config.twilio.request_timeout_secs),
        )
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, credentials: ProviderCredentials) -> Self {
        Self::build(base_url, credentials, Duration::from_secs(10))
    }

    fn build(base_url: String, credentials: ProviderCredentials, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        let auth_header = basic_auth(&credentials.auth_id, &credentials.auth_secret);

        Self {
            base_url,
            credentials,
            auth_header,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// URL of the message-creation endpoint for the configured account.
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.credentials.account_id)
        )
    }

    /// Map a ureq error to a ProviderError.
    fn map_error(&self, error: ureq::Error) -> ProviderError {
        match error {
            ureq::Error::Status(status, response) => {
                let status_text = response.status_text().to_string();
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                ProviderError::Status {
                    status,
                    status_text,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if is_timeout(&transport) {
                    ProviderError::Timeout
                } else {
                    ProviderError::Transport(transport.to_string())
                }
            }
        }
    }
}

impl MessageSender for TwilioClient {
    fn send_message(&self, to: &PhoneNumber, body: &str) -> ProviderResult<MessageResource> {
        let start = Instant::now();
        let url = self.messages_url();

        tracing::debug!("POST {} (To: {})", url, to);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &self.auth_header)
            .set("Accept", "application/json")
            .send_form(&[
                ("To", to.as_str()),
                ("From", self.credentials.sender_number.as_str()),
                ("Body", body),
            ])
            .map_err(|e| self.map_error(e))
            .and_then(|response| {
                // Anything but a JSON object counts as a failed send.
                response
                    .into_json::<MessageResource>()
                    .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
            });

        self.metrics.record_http_request(start.elapsed());
        match &result {
            Ok(resource) => {
                tracing::debug!(
                    "POST {} - Accepted (sid: {})",
                    url,
                    resource
                        .get("sid")
                        .and_then(|v| v.as_str())
                        .unwrap_or("<none>")
                );
            }
            Err(ProviderError::Status { message, .. }) => {
                tracing::debug!("POST {} - Rejected: {}", url, message);
                self.metrics.record_http_error();
            }
            Err(e) => {
                tracing::debug!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
            }
        }

        result
    }
}

fn basic_auth(user: &str, password: &str) -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", user, password));
    format!("Basic {}", token)
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    use std::error::Error as _;

    transport
        .source()
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .map(|io| {
            matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            )
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> ProviderCredentials {
        ProviderCredentials {
            account_id: "AC123".to_string(),
            auth_id: "SK456".to_string(),
            auth_secret: "shh".to_string(),
            sender_number: "+15550001111".to_string(),
        }
    }

    #[test]
    fn test_basic_auth_header() {
        // base64("SK456:shh")
        assert_eq!(basic_auth("SK456", "shh"), "Basic U0s0NTY6c2ho");
    }

    #[test]
    fn test_messages_url() {
        let client =
            TwilioClient::with_base_url("https://api.twilio.com/".to_string(), credentials());
        assert_eq!(
            client.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn test_new_uses_config_base_url() {
        let config = Config::from_toml_str(
            r#"
[twilio]
account = "AC123"
sid = "SK456"
secret = "shh"
phone_number = "+15550001111"
"#,
            "test",
        )
        .unwrap();

        let client = TwilioClient::new(&config);
        assert!(client
            .messages_url()
            .starts_with("https://api.twilio.com/2010-04-01/Accounts/AC123"));
    }
}
