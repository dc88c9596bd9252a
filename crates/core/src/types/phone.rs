//! Phone number type.
//!
//! Seller contact numbers are stored exactly as configured (with spaces,
//! dashes, a leading `+`, whatever the seller typed) because that is the
//! form shown on the contact surfaces. Messaging deep links need the
//! digits-only view, which [`Phone::digits`] derives by stripping every
//! non-numeric character.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains no digits at all.
    #[error("phone number must contain at least one digit")]
    NoDigits,
}

/// A display-formatted phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains no digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.trim().is_empty() {
            return Err(PhoneError::Empty);
        }
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NoDigits);
        }
        Ok(Self(s.to_owned()))
    }

    /// The phone number as configured, for display.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits-only form used in messaging deep links.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_strips_formatting() {
        let phone = Phone::parse("+91 98765 43210").unwrap();
        assert_eq!(phone.digits(), "919876543210");

        let phone = Phone::parse("(040) 2345-6789").unwrap();
        assert_eq!(phone.digits(), "04023456789");
    }

    #[test]
    fn test_display_preserves_formatting() {
        let phone = Phone::parse("+91 98765 43210").unwrap();
        assert_eq!(phone.to_string(), "+91 98765 43210");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(Phone::parse(""), Err(PhoneError::Empty)));
        assert!(matches!(Phone::parse("   "), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_parse_rejects_digitless() {
        assert!(matches!(Phone::parse("call me"), Err(PhoneError::NoDigits)));
    }
}
