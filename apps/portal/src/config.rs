use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::resume::upload::UploadRules;

/// Which durable key-value backend holds preferences and session flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesBackend {
    File(PathBuf),
    Redis(String),
    Memory,
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub preferences: PreferencesBackend,
    /// Latency of the mocked login/signup/job endpoints.
    pub api_delay: Duration,
    /// Simulated resume processing time between Uploading and Populated.
    pub resume_delay: Duration,
    pub session_timeout: Duration,
    pub logout_grace: Duration,
    pub max_upload_bytes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = lookup("PREFERENCES_BACKEND").unwrap_or_else(|| "file".to_string());
        let preferences = match backend.as_str() {
            "file" => PreferencesBackend::File(PathBuf::from(
                lookup("PREFERENCES_PATH").unwrap_or_else(|| "data/preferences.json".to_string()),
            )),
            "redis" => PreferencesBackend::Redis(lookup("REDIS_URL").with_context(|| {
                "Required environment variable 'REDIS_URL' is not set (PREFERENCES_BACKEND=redis)"
            })?),
            "memory" => PreferencesBackend::Memory,
            other => bail!("PREFERENCES_BACKEND must be one of file, redis, memory (got '{other}')"),
        };

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            preferences,
            api_delay: Duration::from_millis(parse_or(&lookup, "API_DELAY_MS", 1000)?),
            resume_delay: Duration::from_millis(parse_or(&lookup, "RESUME_DELAY_MS", 2000)?),
            session_timeout: Duration::from_secs(parse_or(&lookup, "SESSION_TIMEOUT_SECS", 30 * 60)?),
            logout_grace: Duration::from_secs(parse_or(&lookup, "LOGOUT_GRACE_SECS", 2)?),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 5 * 1024 * 1024)?,
        })
    }

    pub fn upload_rules(&self) -> UploadRules {
        UploadRules {
            max_size: self.max_upload_bytes,
            ..UploadRules::default()
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number (got '{raw}')")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(
            config.preferences,
            PreferencesBackend::File(PathBuf::from("data/preferences.json"))
        );
        assert_eq!(config.resume_delay, Duration::from_secs(2));
        assert_eq!(config.api_delay, Duration::from_secs(1));
        assert_eq!(config.session_timeout, Duration::from_secs(1800));
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_redis_backend_requires_url() {
        assert!(config_from(&[("PREFERENCES_BACKEND", "redis")]).is_err());
        let config = config_from(&[
            ("PREFERENCES_BACKEND", "redis"),
            ("REDIS_URL", "redis://localhost:6379"),
        ])
        .unwrap();
        assert_eq!(
            config.preferences,
            PreferencesBackend::Redis("redis://localhost:6379".to_string())
        );
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(config_from(&[("PREFERENCES_BACKEND", "sqlite")]).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_upload_rules_follow_ceiling() {
        let config = config_from(&[("MAX_UPLOAD_BYTES", "1024")]).unwrap();
        assert_eq!(config.upload_rules().max_size, 1024);
    }
}
