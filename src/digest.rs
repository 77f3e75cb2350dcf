//! SHA-1 digest of a password, split for the k-anonymity range query.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Length of the full hex digest.
pub const DIGEST_HEX_LEN: usize = 40;

/// Number of leading hex characters sent to the range endpoint.
pub const PREFIX_LEN: usize = 5;

/// Number of trailing hex characters compared locally.
pub const SUFFIX_LEN: usize = DIGEST_HEX_LEN - PREFIX_LEN;

/// Uppercase hex SHA-1 of a password's UTF-8 bytes.
///
/// Only [`DigestHex::prefix`] may leave the process. `Debug` prints the
/// prefix alone so the value can sit in logged structs safely.
#[derive(Clone, PartialEq, Eq)]
pub struct DigestHex(String);

impl DigestHex {
    pub fn of(password: &SecretString) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.expose_secret().as_bytes());
        Self(hex::encode_upper(hasher.finalize()))
    }

    pub fn prefix(&self) -> &str {
        &self.0[..PREFIX_LEN]
    }

    pub fn suffix(&self) -> &str {
        &self.0[PREFIX_LEN..]
    }

    pub fn split(&self) -> (&str, &str) {
        self.0.split_at(PREFIX_LEN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DigestHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestHex({}…)", self.prefix())
    }
}
