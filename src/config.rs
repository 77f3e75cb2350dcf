//! Breach checker configuration.

/// Public k-anonymity range service.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";

pub const DEFAULT_USER_AGENT: &str = concat!("pwd-audit/", env!("CARGO_PKG_VERSION"));

/// Settings for [`crate::HttpRangeSource`].
///
/// Passed in by the caller; the crate keeps no process-wide configuration.
///
/// ```rust
/// use pwd_audit::BreachConfig;
///
/// let config = BreachConfig::default()
///     .base_url("https://pwned.internal.example")
///     .add_padding(false);
/// assert_eq!(config.range_url("5BAA6"), "https://pwned.internal.example/range/5BAA6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Ask the service to pad responses with fake records so the body size
    /// does not hint at the prefix.
    pub add_padding: bool,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            add_padding: true,
        }
    }
}

impl BreachConfig {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn add_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// URL of the range query for `prefix`.
    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url.trim_end_matches('/'), prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BreachConfig::default();
        assert_eq!(config.base_url, "https://api.pwnedpasswords.com");
        assert!(config.add_padding);
        assert!(config.user_agent.starts_with("pwd-audit/"));
    }

    #[test]
    fn test_range_url_trailing_slash() {
        let config = BreachConfig::default().base_url("http://localhost:8080/");
        assert_eq!(config.range_url("00000"), "http://localhost:8080/range/00000");
    }
}
