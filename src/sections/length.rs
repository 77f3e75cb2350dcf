//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::StrengthLabel;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (most emoji) counts as two.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().encode_utf16().count() < MIN_LENGTH {
        return Some(StrengthLabel::TooShort);
    }
    None
}
