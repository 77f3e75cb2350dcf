//! Strength classification sections
//!
//! Each section checks one rule. Sections are evaluated in order by the
//! evaluator and the first one that fires decides the label.

mod length;
mod special;
mod variety;

pub use length::{MIN_LENGTH, length_section};
pub use special::{SPECIAL_CHARACTERS, special_character_section};
pub use variety::{digit_section, lowercase_section, uppercase_section};

use crate::StrengthLabel;

/// Result type for section evaluation functions.
/// - `Some(label)` - Section fired, classification stops here
/// - `None` - Section passed, continue with the next one
pub type SectionResult = Option<StrengthLabel>;
