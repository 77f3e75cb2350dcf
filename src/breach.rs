//! Breach checker - k-anonymity range query against a compromised-password corpus.
//!
//! The password is hashed locally, only the first five hex characters of the
//! digest are sent to the range service, and the returned suffixes are
//! compared locally.

use std::fmt;

use secrecy::SecretString;

use crate::config::BreachConfig;
use crate::digest::DigestHex;
use crate::error::BreachError;
use crate::range::{RangeRecord, RangeResponse};

/// User-facing text of the warning raised when breach status is unknown.
pub const BREACH_CHECK_FAILED_NOTICE: &str =
    "Failed to check password breach. Please try again later.";

/// Where range bodies come from.
///
/// Implementations perform exactly one read per call and must send nothing
/// but `prefix`.
pub trait RangeSource {
    fn fetch_range(
        &self,
        prefix: &str,
    ) -> impl Future<Output = Result<String, BreachError>> + Send;
}

/// [`RangeSource`] backed by the HTTP range endpoint.
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::Client,
    config: BreachConfig,
}

impl HttpRangeSource {
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    /// Reuses an existing client. The configured user agent is not applied.
    pub fn with_client(client: reqwest::Client, config: BreachConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &BreachConfig {
        &self.config
    }
}

impl RangeSource for HttpRangeSource {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = self.config.range_url(prefix);
        tracing::debug!(prefix, "querying breach range");

        let mut request = self.client.get(&url);
        if self.config.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status));
        }

        Ok(response.text().await?)
    }
}

/// Recoverable failure surfaced next to a `false` verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachWarning {
    pub notice: &'static str,
    pub cause: String,
}

impl BreachWarning {
    fn from_error(err: &BreachError) -> Self {
        Self {
            notice: BREACH_CHECK_FAILED_NOTICE,
            cause: err.to_string(),
        }
    }
}

impl fmt::Display for BreachWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notice)
    }
}

/// Receives warnings from [`BreachChecker::check_breach`].
pub trait WarningSink {
    fn warn(&self, warning: &BreachWarning);
}

/// Default sink: logs the warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn warn(&self, warning: &BreachWarning) {
        tracing::warn!(cause = %warning.cause, "{}", warning.notice);
    }
}

impl<T: WarningSink + ?Sized> WarningSink for &T {
    fn warn(&self, warning: &BreachWarning) {
        (**self).warn(warning)
    }
}

#[cfg(feature = "async")]
impl WarningSink for tokio::sync::mpsc::UnboundedSender<BreachWarning> {
    fn warn(&self, warning: &BreachWarning) {
        if self.send(warning.clone()).is_err() {
            tracing::debug!("breach warning dropped, receiver closed");
        }
    }
}

/// Checks passwords against the breach corpus.
///
/// Stateless between calls; concurrent checks share nothing but `&self`.
#[derive(Debug, Clone)]
pub struct BreachChecker<S, W = LogWarnings> {
    source: S,
    warnings: W,
}

impl BreachChecker<HttpRangeSource, LogWarnings> {
    /// Checker talking to the HTTP range endpoint described by `config`.
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        Ok(Self::with_source(HttpRangeSource::new(config)?))
    }
}

impl<S> BreachChecker<S, LogWarnings> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            warnings: LogWarnings,
        }
    }
}

impl<S, W> BreachChecker<S, W> {
    pub fn with_warnings<W2: WarningSink>(self, warnings: W2) -> BreachChecker<S, W2> {
        BreachChecker {
            source: self.source,
            warnings,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: RangeSource, W: WarningSink> BreachChecker<S, W> {
    /// Looks the password up, returning the matching record if breached.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The range request fails or returns a non-success status
    /// - The body contains a malformed record
    pub async fn lookup(
        &self,
        password: &SecretString,
    ) -> Result<Option<RangeRecord>, BreachError> {
        let digest = DigestHex::of(password);
        let (prefix, suffix) = digest.split();

        let body = self.source.fetch_range(prefix).await?;
        let range = RangeResponse::parse(&body)?;
        let found = range.find(suffix).cloned();

        tracing::debug!(
            prefix,
            records = range.len(),
            breached = found.is_some(),
            "breach range checked"
        );

        Ok(found)
    }

    /// Returns `true` if the password appears in the breach corpus.
    ///
    /// Never fails: when the status cannot be determined the result is
    /// `false` and one [`BreachWarning`] goes to the configured sink.
    pub async fn check_breach(&self, password: &SecretString) -> bool {
        match self.lookup(password).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                tracing::debug!(error = %e, "breach status undetermined");
                self.warnings.warn(&BreachWarning::from_error(&e));
                false
            }
        }
    }
}
