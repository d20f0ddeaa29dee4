//! Contact model representing one recipient row from the contact file.

use crate::domain::PhoneNumber;
use serde::Serialize;
use std::fmt;

/// A recipient with a display name and a canonical phone number.
///
/// Contacts are built by the loader and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Display name, exactly as it appeared in the source
    pub name: String,

    /// Canonical phone number (`+1` followed by ten digits)
    pub phone_number: PhoneNumber,
}

impl Contact {
    /// Create a contact from an already-normalized phone number.
    pub fn new(name: impl Into<String>, phone_number: PhoneNumber) -> Self {
        Self {
            name: name.into(),
            phone_number,
        }
    }
}

/// Formats as `name (+15551234567)`, the identity used in status lines.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone_number)
    }
}
