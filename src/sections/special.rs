//! Special character section.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::StrengthLabel;

/// Characters counted as special. Other punctuation is not recognised.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()";

pub fn special_character_section(password: &SecretString) -> SectionResult {
    if password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c))
    {
        None
    } else {
        Some(StrengthLabel::NoSpecialCharacters)
    }
}
