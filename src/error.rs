//! Error types for SMS Blast.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when sending a message through the provider API.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Request never produced an HTTP response
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Provider answered with a non-2xx status
    #[error("bad status code: {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        message: String,
    },

    /// 2xx response whose body was not a JSON object
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file '{path}': {reason}")]
    Read { path: String, reason: String },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Failed to parse config file '{path}': {reason}")]
    Parse { path: String, reason: String },

    /// Required value is missing or blank
    #[error("Missing required config value: {0}")]
    MissingValue(String),

    /// Value present but unusable
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Errors that abort loading an input file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be opened or read
    #[error("Failed to read '{path}': {reason}")]
    SourceUnreadable { path: String, reason: String },
}

/// Convenience type alias for Results with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with LoadError
pub type LoadResult<T> = Result<T, LoadError>;
