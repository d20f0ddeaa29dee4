//! Configuration management for SMS Blast.
//!
//! Settings come from a TOML file with a `[twilio]` section. Credential values
//! can be overridden by environment variables (a `.env` file is loaded first if
//! present), so secrets do not have to live in the file.

use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Default provider API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com";

/// Environment variables that override `[twilio]` credential keys.
pub const ENV_OVERRIDES: [&str; 4] = [
    "TWILIO_ACCOUNT",
    "TWILIO_SID",
    "TWILIO_SECRET",
    "TWILIO_PHONE_NUMBER",
];

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default)]
    pub log_level: Option<String>,

    /// Provider settings
    #[serde(default)]
    pub twilio: TwilioConfig,
}

/// The `[twilio]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioConfig {
    /// Account the messages are billed to (appears in the request path)
    #[serde(default)]
    pub account: String,

    /// Key or account SID used as the Basic auth user
    #[serde(default)]
    pub sid: String,

    /// Secret used as the Basic auth password
    #[serde(default)]
    pub secret: String,

    /// Sender number placed in the `From` field
    #[serde(default)]
    pub phone_number: String,

    /// API base URL (default: https://api.twilio.com)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        TwilioConfig {
            account: String::new(),
            sid: String::new(),
            secret: String::new(),
            phone_number: String::new(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

/// Credentials and sender identity handed to the provider client.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub account_id: String,
    pub auth_id: String,
    pub auth_secret: String,
    pub sender_number: String,
}

// Keep the secret out of logs.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("account_id", &self.account_id)
            .field("auth_id", &self.auth_id)
            .field("auth_secret", &"<redacted>")
            .field("sender_number", &self.sender_number)
            .finish()
    }
}

impl Config {
    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// Optional environment variables (each overrides the matching `[twilio]` key):
    /// - `TWILIO_ACCOUNT`
    /// - `TWILIO_SID`
    /// - `TWILIO_SECRET`
    /// - `TWILIO_PHONE_NUMBER`
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config = Self::from_toml_str(&content, &path.display().to_string())?;

        // dotenvy::dotenv() doesn't print anything, and a missing .env is fine
        let _ = dotenvy::dotenv();
        config.apply_env_overrides();

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration text without touching the environment or validating.
    pub fn from_toml_str(content: &str, origin: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// Replace credential values with any set environment variables.
    pub fn apply_env_overrides(&mut self) {
        let twilio = &mut self.twilio;
        let targets = [
            &mut twilio.account,
            &mut twilio.sid,
            &mut twilio.secret,
            &mut twilio.phone_number,
        ];
        for (var, target) in ENV_OVERRIDES.into_iter().zip(targets) {
            if let Ok(value) = env::var(var) {
                tracing::debug!("Using {} from environment", var);
                *target = value;
            }
        }
    }

    /// Check that every value needed to send is present and usable.
    pub fn validate(&self) -> ConfigResult<()> {
        let twilio = &self.twilio;
        for (key, value) in [
            ("twilio.account", &twilio.account),
            ("twilio.sid", &twilio.sid),
            ("twilio.secret", &twilio.secret),
            ("twilio.phone_number", &twilio.phone_number),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingValue(key.to_string()));
            }
        }

        if !twilio.api_base_url.starts_with("http://")
            && !twilio.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                key: "twilio.api_base_url".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if twilio.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "twilio.request_timeout_secs".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// The credential bundle for the provider client.
    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials {
            account_id: self.twilio.account.clone(),
            auth_id: self.twilio.sid.clone(),
            auth_secret: self.twilio.secret.clone(),
            sender_number: self.twilio.phone_number.clone(),
        }
    }
}
