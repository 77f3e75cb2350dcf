//! Result types shared by the classifier, the breach checker and the auditor.

use std::fmt;

/// Outcome of the ordered strength rules.
///
/// Exactly one label is produced per password; see [`crate::classify_strength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    TooShort,
    NoUppercase,
    NoLowercase,
    NoNumbers,
    NoSpecialCharacters,
    Strong,
}

/// Coarse grouping of a [`StrengthLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn tier(self) -> StrengthTier {
        match self {
            StrengthLabel::TooShort
            | StrengthLabel::NoUppercase
            | StrengthLabel::NoLowercase
            | StrengthLabel::NoNumbers => StrengthTier::Weak,
            StrengthLabel::NoSpecialCharacters => StrengthTier::Medium,
            StrengthLabel::Strong => StrengthTier::Strong,
        }
    }

    /// The part of the label after the tier, `None` for [`StrengthLabel::Strong`].
    pub fn reason(self) -> Option<&'static str> {
        match self {
            StrengthLabel::TooShort => Some("too short"),
            StrengthLabel::NoUppercase => Some("no uppercase letters"),
            StrengthLabel::NoLowercase => Some("no lowercase letters"),
            StrengthLabel::NoNumbers => Some("no numbers"),
            StrengthLabel::NoSpecialCharacters => Some("no special characters"),
            StrengthLabel::Strong => None,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        })
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{}: {}", self.tier(), reason),
            None => write!(f, "{}", self.tier()),
        }
    }
}

/// Both verdicts for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordAudit {
    pub strength: StrengthLabel,
    pub breached: bool,
}

impl PasswordAudit {
    pub fn breach_notice(&self) -> &'static str {
        if self.breached {
            "⚠️ This password has been breached!"
        } else {
            "✅ This password is safe from breaches."
        }
    }
}

impl fmt::Display for PasswordAudit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strength: {}", self.strength)?;
        write!(f, "{}", self.breach_notice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::TooShort.to_string(), "Weak: too short");
        assert_eq!(
            StrengthLabel::NoUppercase.to_string(),
            "Weak: no uppercase letters"
        );
        assert_eq!(
            StrengthLabel::NoLowercase.to_string(),
            "Weak: no lowercase letters"
        );
        assert_eq!(StrengthLabel::NoNumbers.to_string(), "Weak: no numbers");
        assert_eq!(
            StrengthLabel::NoSpecialCharacters.to_string(),
            "Medium: no special characters"
        );
        assert_eq!(StrengthLabel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_label_tier() {
        assert_eq!(StrengthLabel::NoNumbers.tier(), StrengthTier::Weak);
        assert_eq!(StrengthLabel::NoSpecialCharacters.tier(), StrengthTier::Medium);
        assert_eq!(StrengthLabel::Strong.tier(), StrengthTier::Strong);
        assert!(StrengthTier::Weak < StrengthTier::Strong);
    }

    #[test]
    fn test_audit_display() {
        let audit = PasswordAudit {
            strength: StrengthLabel::Strong,
            breached: true,
        };
        assert_eq!(
            audit.to_string(),
            "Strength: Strong\n⚠️ This password has been breached!"
        );

        let audit = PasswordAudit {
            strength: StrengthLabel::TooShort,
            breached: false,
        };
        assert!(audit.to_string().ends_with("safe from breaches."));
    }
}
