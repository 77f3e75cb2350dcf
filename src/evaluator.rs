//! Strength classifier - runs the sections in order and stops at the first that fires.

use secrecy::SecretString;

use crate::StrengthLabel;
use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, special_character_section,
    uppercase_section,
};

/// Classifies a password into exactly one [`StrengthLabel`].
///
/// Rules are evaluated in fixed order: length, uppercase, lowercase, digits,
/// special characters. The first rule that fires decides the label, so the
/// function is total and never fails; the empty string is `TooShort`.
pub fn classify_strength(password: &SecretString) -> StrengthLabel {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 5] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_character_section),
    ];

    for (section_name, section_fn) in sections {
        if let Some(label) = section_fn(password) {
            tracing::trace!(section = section_name, %label, "strength section fired");
            return label;
        }
    }

    StrengthLabel::Strong
}
