//! Password audit library
//!
//! This library gives two independent verdicts for a candidate password:
//! a local strength classification and a breach-exposure check against a
//! k-anonymity range service. The plaintext never leaves the process; only
//! the first five hex characters of its SHA-1 digest are sent.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based delivery of audit results and warnings
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{Auditor, BreachChecker, BreachConfig, classify_strength};
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), pwd_audit::BreachError> {
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! println!("Strength: {}", classify_strength(&password));
//!
//! let auditor = Auditor::new(BreachChecker::new(BreachConfig::default())?);
//! let audit = auditor.audit(&password).await;
//! println!("{audit}");
//! # Ok(())
//! # }
//! ```

// Internal modules
mod audit;
mod breach;
mod config;
mod digest;
mod error;
mod evaluator;
mod generator;
mod range;
mod sections;
mod types;

// Public API
pub use audit::Auditor;
pub use breach::{
    BREACH_CHECK_FAILED_NOTICE, BreachChecker, BreachWarning, HttpRangeSource, LogWarnings,
    RangeSource, WarningSink,
};
pub use config::{BreachConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use digest::{DIGEST_HEX_LEN, DigestHex, PREFIX_LEN, SUFFIX_LEN};
pub use error::BreachError;
pub use evaluator::classify_strength;
pub use generator::{DEFAULT_GENERATED_LENGTH, GENERATOR_CHARSET, generate_password};
pub use range::{RangeRecord, RangeResponse};
pub use sections::{MIN_LENGTH, SPECIAL_CHARACTERS};
pub use types::{PasswordAudit, StrengthLabel, StrengthTier};

#[cfg(feature = "async")]
pub use audit::audit_password_tx;
