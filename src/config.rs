use crate::error::{PayslipError, Result};
use std::env;

pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Outbound mail settings, loaded once at startup and passed explicitly into
/// the notifier. Never read from the environment anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    pub user: String,
    pub pass: String,
    pub server: String,
    pub port: u16,
}

impl MailConfig {
    /// Builds the config from `EMAIL_USER`, `EMAIL_PASS`, `SMTP_SERVER` and
    /// `SMTP_PORT` (defaults to 587). Any missing credential is a `Config`
    /// error; the caller decides whether that disables sending or aborts.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            get(key).ok_or_else(|| PayslipError::Config(format!("{key} is not set")))
        };
        let port = match get("SMTP_PORT") {
            Some(raw) => raw.parse().map_err(|_| {
                PayslipError::Config(format!("SMTP_PORT '{raw}' is not a valid port"))
            })?,
            None => DEFAULT_SMTP_PORT,
        };
        Ok(Self {
            user: require("EMAIL_USER")?,
            pass: require("EMAIL_PASS")?,
            server: require("SMTP_SERVER")?,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> Result<MailConfig> {
        let vars = vars(pairs);
        MailConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_full_config() {
        let config = load(&[
            ("EMAIL_USER", "hr@example.com"),
            ("EMAIL_PASS", "secret"),
            ("SMTP_SERVER", "smtp.example.com"),
            ("SMTP_PORT", "2525"),
        ])
        .unwrap();

        assert_eq!(config.user, "hr@example.com");
        assert_eq!(config.server, "smtp.example.com");
        assert_eq!(config.port, 2525);
    }

    #[test]
    fn test_port_defaults_to_587() {
        let config = load(&[
            ("EMAIL_USER", "hr@example.com"),
            ("EMAIL_PASS", "secret"),
            ("SMTP_SERVER", "smtp.example.com"),
        ])
        .unwrap();

        assert_eq!(config.port, DEFAULT_SMTP_PORT);
    }

    #[test]
    fn test_missing_credentials_is_config_error() {
        match load(&[("SMTP_SERVER", "smtp.example.com")]) {
            Err(PayslipError::Config(msg)) => assert!(msg.contains("EMAIL_USER")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = load(&[
            ("EMAIL_USER", "hr@example.com"),
            ("EMAIL_PASS", "secret"),
            ("SMTP_SERVER", "smtp.example.com"),
            ("SMTP_PORT", "not-a-port"),
        ]);
        match result {
            Err(PayslipError::Config(msg)) => assert!(msg.contains("SMTP_PORT")),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
