//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw phone number did not reduce to exactly ten digits.
    ///
    /// `stripped` is what remained after removing spaces, parentheses and hyphens.
    InvalidPhoneNumber { raw: String, stripped: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhoneNumber { raw, stripped } => {
                write!(f, "invalid phone number: '{}' ('{}')", raw, stripped)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
