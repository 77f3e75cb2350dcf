//! Errors raised while determining breach status.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a breach lookup could not reach a verdict.
///
/// None of the variants carry the password or its digest suffix.
#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Range request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Range service responded with status {0}")]
    Status(StatusCode),
    #[error("Malformed range record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: &'static str },
}
