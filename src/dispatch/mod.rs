//! Per-recipient message dispatch.
//!
//! The dispatcher walks the contact list once, in order. The first contact
//! seen for a canonical number is sent to; later contacts with the same number
//! are skipped without a result. A failed send is recorded against its
//! contact and the loop moves on.
//!
//! Sends are strictly sequential. If they are ever parallelized, the
//! check-and-insert on the attempted set must become a single atomic
//! test-and-set to keep the at-most-once-per-number guarantee.

use crate::client::MessageSender;
use crate::domain::PhoneNumber;
use crate::error::ProviderError;
use crate::models::Contact;
use std::collections::HashSet;
use std::fmt;

/// Outcome of one send attempt.
#[derive(Debug)]
pub enum Outcome {
    /// Provider accepted the message
    Success,

    /// Send failed; the message was not accepted
    Failure(ProviderError),
}

/// One attempted contact and what happened.
#[derive(Debug)]
pub struct DispatchResult {
    pub contact: Contact,
    pub outcome: Outcome,
}

impl DispatchResult {
    /// True when the provider accepted the message.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success)
    }
}

/// The status line printed for this result.
impl fmt::Display for DispatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Success => write!(f, "Sent message to {}", self.contact),
            Outcome::Failure(err) => {
                write!(f, "error sending message for {}: {}", self.contact, err)
            }
        }
    }
}

/// Counts for one dispatch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub sent: usize,
    pub failed: usize,
    pub duplicates_skipped: usize,
}

impl DispatchSummary {
    /// Tally sent and failed results. Duplicates must be added by the caller.
    pub fn from_results(results: &[DispatchResult]) -> Self {
        let sent = results.iter().filter(|r| r.is_success()).count();
        Self {
            sent,
            failed: results.len() - sent,
            duplicates_skipped: 0,
        }
    }

    fn record(&mut self, result: &DispatchResult) {
        if result.is_success() {
            self.sent += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Sends one message per unique phone number through a [`MessageSender`].
pub struct Dispatcher<S> {
    sender: S,
    attempted: HashSet<PhoneNumber>,
    duplicates_skipped: usize,
}

impl<S: MessageSender> Dispatcher<S> {
    /// Create a dispatcher with an empty attempted set.
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            attempted: HashSet::new(),
            duplicates_skipped: 0,
        }
    }

    /// Get a reference to the underlying sender.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Number of contacts skipped because their number was already attempted.
    pub fn duplicates_skipped(&self) -> usize {
        self.duplicates_skipped
    }

    /// Send `message` to every unique number and collect the results in
    /// attempt order.
    pub fn dispatch(&mut self, contacts: &[Contact], message: &str) -> Vec<DispatchResult> {
        let mut results = Vec::new();
        self.dispatch_with(contacts, message, |result| results.push(result));
        results
    }

    /// Send `message` to every unique number, handing each result to
    /// `on_result` as soon as the send completes.
    pub fn dispatch_with<F>(
        &mut self,
        contacts: &[Contact],
        message: &str,
        mut on_result: F,
    ) -> DispatchSummary
    where
        F: FnMut(DispatchResult),
    {
        let mut summary = DispatchSummary::default();

        for contact in contacts {
            // `insert` is the test-and-set: false means this number was seen.
            if !self.attempted.insert(contact.phone_number.clone()) {
                tracing::debug!("Skipping duplicate number for {}", contact);
                self.duplicates_skipped += 1;
                summary.duplicates_skipped += 1;
                continue;
            }

            let outcome = match self.sender.send_message(&contact.phone_number, message) {
                Ok(_) => {
                    tracing::info!("Sent message to {}", contact);
                    Outcome::Success
                }
                Err(err) => {
                    tracing::warn!("Failed to send message to {}: {}", contact, err);
                    Outcome::Failure(err)
                }
            };

            let result = DispatchResult {
                contact: contact.clone(),
                outcome,
            };
            summary.record(&result);
            on_result(result);
        }

        summary
    }
}
