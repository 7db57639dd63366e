use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Artificial latency before recommendations are returned.
    pub recommendation_delay_ms: u64,
    /// Artificial latency for mock sign-in and sign-up.
    pub auth_delay_ms: u64,
    /// Artificial latency for the mock LinkedIn connect.
    pub linkedin_delay_ms: u64,
    /// Sessions older than this are dropped.
    pub session_ttl_minutes: i64,
    /// Seeds the scoring jitter for reproducible rankings. Unset in production.
    pub scoring_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            recommendation_delay_ms: 1500,
            auth_delay_ms: 800,
            linkedin_delay_ms: 1200,
            session_ttl_minutes: 24 * 60,
            scoring_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            recommendation_delay_ms: parse_env(
                "RECOMMENDATION_DELAY_MS",
                defaults.recommendation_delay_ms,
            )?,
            auth_delay_ms: parse_env("AUTH_DELAY_MS", defaults.auth_delay_ms)?,
            linkedin_delay_ms: parse_env("LINKEDIN_DELAY_MS", defaults.linkedin_delay_ms)?,
            session_ttl_minutes: parse_env("SESSION_TTL_MINUTES", defaults.session_ttl_minutes)?,
            scoring_seed: match std::env::var("SCORING_SEED") {
                Ok(raw) => Some(
                    raw.parse::<u64>()
                        .context("SCORING_SEED must be an unsigned integer")?,
                ),
                Err(_) => None,
            },
        })
    }

    pub fn recommendation_delay(&self) -> Duration {
        Duration::from_millis(self.recommendation_delay_ms)
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn linkedin_delay(&self) -> Duration {
        Duration::from_millis(self.linkedin_delay_ms)
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_ttl_minutes)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{key} has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.recommendation_delay(), Duration::from_millis(1500));
        assert_eq!(config.auth_delay(), Duration::from_millis(800));
        assert_eq!(config.linkedin_delay(), Duration::from_millis(1200));
        assert_eq!(config.session_ttl(), chrono::Duration::hours(24));
        assert!(config.scoring_seed.is_none());
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: u64 = parse_env("PATHWAY_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_invalid_value_errors() {
        std::env::set_var("PATHWAY_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("PATHWAY_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        std::env::remove_var("PATHWAY_TEST_BAD_PORT");
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("PATHWAY_TEST_DELAY", " 250 ");
        let value: u64 = parse_env("PATHWAY_TEST_DELAY", 0).unwrap();
        assert_eq!(value, 250);
        std::env::remove_var("PATHWAY_TEST_DELAY");
    }
}
