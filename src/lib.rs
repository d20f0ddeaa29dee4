//! SMS Blast - send one text message to every contact in a CSV file.
//!
//! Contacts are loaded and their phone numbers normalized, the operator
//! confirms the message, then one message is sent per unique number through
//! the Twilio Messages API. A failed send is reported and the run continues.
//!
//! # Architecture
//!
//! - **domain**: Phone number normalization
//! - **models**: The `Contact` recipient type
//! - **contacts**: CSV contact loading with per-row diagnostics
//! - **message**: Message body loading
//! - **config**: TOML configuration and provider credentials
//! - **client**: Blocking HTTP client for the provider
//! - **dispatch**: Deduplicating, failure-isolated send loop
//! - **confirm**: The `YES` confirmation gate
//! - **metrics**: Request counters
//! - **error**: Error types

pub mod client;
pub mod config;
pub mod confirm;
pub mod contacts;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod message;
pub mod metrics;
pub mod models;

pub use client::{MessageResource, MessageSender, TwilioClient};
pub use config::{Config, ProviderCredentials};
pub use confirm::confirm_send;
pub use contacts::{ContactLoader, LoadReport, RejectReason, RejectedRow};
pub use dispatch::{DispatchResult, DispatchSummary, Dispatcher, Outcome};
pub use domain::{PhoneNumber, ValidationError};
pub use error::{ConfigError, LoadError, ProviderError};
pub use message::load_message;
pub use metrics::{Metrics, MetricsSummary};
pub use models::Contact;
