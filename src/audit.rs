//! Password audit - strength classification plus breach check for one input.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::breach::{BreachChecker, LogWarnings, RangeSource, WarningSink};
use crate::evaluator::classify_strength;
use crate::types::PasswordAudit;

/// Runs both verdicts for a password.
///
/// The two checks are independent; the strength label is computed before the
/// breach query is issued and is never affected by its outcome.
#[derive(Debug, Clone)]
pub struct Auditor<S, W = LogWarnings> {
    checker: BreachChecker<S, W>,
}

impl<S, W> Auditor<S, W> {
    pub fn new(checker: BreachChecker<S, W>) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &BreachChecker<S, W> {
        &self.checker
    }
}

impl<S: RangeSource, W: WarningSink> Auditor<S, W> {
    pub async fn audit(&self, password: &SecretString) -> PasswordAudit {
        let strength = classify_strength(password);
        let breached = self.checker.check_breach(password).await;
        PasswordAudit { strength, breached }
    }
}

/// Async version that sends the audit via channel.
///
/// A closed receiver means the caller no longer wants this result; it is
/// logged and dropped.
#[cfg(feature = "async")]
pub async fn audit_password_tx<S: RangeSource, W: WarningSink>(
    auditor: &Auditor<S, W>,
    password: &SecretString,
    tx: mpsc::Sender<PasswordAudit>,
) {
    tracing::debug!("password audit is about to start...");

    let audit = auditor.audit(password).await;

    if let Err(e) = tx.send(audit).await {
        tracing::debug!("Discarding password audit result: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::tests::{PASSWORD_PREFIX, PASSWORD_SUFFIX, RecordingSink, StubSource};
    use crate::{StrengthLabel, StrengthTier};
    use reqwest::StatusCode;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_audit_weak_and_breached() {
        let body = format!("{PASSWORD_SUFFIX}:52256179");
        let auditor = Auditor::new(BreachChecker::with_source(StubSource::with_body(
            PASSWORD_PREFIX,
            &body,
        )));

        let audit = auditor.audit(&secret("password")).await;
        assert_eq!(audit.strength, StrengthLabel::NoUppercase);
        assert_eq!(audit.strength.tier(), StrengthTier::Weak);
        assert!(audit.breached);
    }

    #[tokio::test]
    async fn test_audit_strong_not_breached() {
        let auditor = Auditor::new(BreachChecker::with_source(StubSource::default()));

        let audit = auditor.audit(&secret("Ab3!Ab3!")).await;
        assert_eq!(audit.strength, StrengthLabel::Strong);
        assert!(!audit.breached);
    }

    #[tokio::test]
    async fn test_audit_failure_keeps_strength() {
        let sink = RecordingSink::default();
        let auditor = Auditor::new(
            BreachChecker::with_source(StubSource::failing(StatusCode::BAD_GATEWAY))
                .with_warnings(&sink),
        );

        let audit = auditor.audit(&secret("abc")).await;
        assert_eq!(audit.strength, StrengthLabel::TooShort);
        assert!(!audit.breached);
        assert_eq!(sink.0.lock().unwrap().len(), 1);
    }
}
