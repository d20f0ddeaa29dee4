//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Country code prepended to every normalized number.
pub const COUNTRY_CODE: &str = "+1";

/// Characters removed from raw input before validation.
const STRIPPED_CHARS: [char; 4] = [' ', '(', ')', '-'];

/// Number of digits a raw number must reduce to.
const NATIONAL_DIGITS: usize = 10;

/// A canonical, dialable phone number such as `+15551234567`.
///
/// The only way to build one is [`PhoneNumber::normalize`], so every value
/// holds the `+1` prefix followed by exactly ten ASCII digits.
///
/// # Example
///
/// ```
/// use sms_blast::domain::PhoneNumber;
///
/// let phone = PhoneNumber::normalize("(555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "+15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize a loosely formatted number into canonical form.
    ///
    /// Spaces, `(`, `)` and `-` are removed; what remains must be exactly ten
    /// decimal digits. Anything else (letters, extensions, `+`, dots, or an
    /// eleven digit number that already carries a country code) is rejected
    /// rather than guessed at.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneNumber` if the input does not
    /// reduce to ten digits.
    pub fn normalize(raw: &str) -> Result<Self, ValidationError> {
        let stripped: String = raw.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();

        // Length is checked on chars, so multi-byte input cannot sneak past.
        if stripped.chars().count() != NATIONAL_DIGITS
            || !stripped.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ValidationError::InvalidPhoneNumber {
                raw: raw.to_string(),
                stripped,
            });
        }

        Ok(Self(format!("{}{}", COUNTRY_CODE, stripped)))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The ten national digits without the country code.
    pub fn national_digits(&self) -> &str {
        &self.0[COUNTRY_CODE.len()..]
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
