//! Character variety sections - uppercase, lowercase and digit checks.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::StrengthLabel;

/// Fires when no `A-Z` letter is present.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    missing(password, |c| c.is_ascii_uppercase(), StrengthLabel::NoUppercase)
}

/// Fires when no `a-z` letter is present.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    missing(password, |c| c.is_ascii_lowercase(), StrengthLabel::NoLowercase)
}

/// Fires when no `0-9` digit is present.
pub fn digit_section(password: &SecretString) -> SectionResult {
    missing(password, |c| c.is_ascii_digit(), StrengthLabel::NoNumbers)
}

fn missing(
    password: &SecretString,
    pred: fn(&char) -> bool,
    label: StrengthLabel,
) -> SectionResult {
    if password.expose_secret().chars().any(|c| pred(&c)) {
        None
    } else {
        Some(label)
    }
}
