//! Random password generation.

use rand::Rng;
use rand::rngs::OsRng;
use secrecy::SecretString;

/// Alphabet for generated passwords. Look-alike glyphs (`I O l 0 1`) are left out.
pub const GENERATOR_CHARSET: &str =
    "ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%^&*()";

pub const DEFAULT_GENERATED_LENGTH: usize = 16;

/// Generates `length` characters drawn uniformly from [`GENERATOR_CHARSET`]
/// using the operating system's CSPRNG.
pub fn generate_password(length: usize) -> SecretString {
    let charset = GENERATOR_CHARSET.as_bytes();
    let password: String = (0..length)
        .map(|_| charset[OsRng.gen_range(0..charset.len())] as char)
        .collect();
    SecretString::new(password.into())
}
