use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

/// Runtime settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Mount point of the pages, e.g. `/feedback`. Empty serves them at the root.
    pub base_path: String,
    /// JSON fixtures loaded into an empty database at startup.
    pub fixtures: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default:?}");
                default.to_string()
            })
        };

        let port = var("FEEDBACK_PORT", "8000");
        let port: u16 = port
            .parse()
            .with_context(|| format!("FEEDBACK_PORT is not a valid port: {port:?}"))?;

        Ok(Self {
            host: var("FEEDBACK_HOST", "0.0.0.0"),
            port,
            db_path: var("FEEDBACK_DB_PATH", "feedback.db").into(),
            base_path: var("FEEDBACK_BASE_PATH", ""),
            fixtures: lookup("FEEDBACK_FIXTURES")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .with_context(|| format!("Invalid listen address {addr:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.db_path, PathBuf::from("feedback.db"));
        assert_eq!(config.base_path, "");
        assert!(config.fixtures.is_none());
        assert_eq!(config.addr().unwrap().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("FEEDBACK_HOST", "127.0.0.1"),
            ("FEEDBACK_PORT", "9100"),
            ("FEEDBACK_BASE_PATH", "/feedback"),
            ("FEEDBACK_FIXTURES", "seed.json"),
        ])
        .unwrap();
        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:9100");
        assert_eq!(config.base_path, "/feedback");
        assert_eq!(config.fixtures, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("FEEDBACK_PORT", "http")]).is_err());
        assert!(config(&[("FEEDBACK_PORT", "70000")]).is_err());
    }

    #[test]
    fn blank_fixtures_means_none() {
        assert!(config(&[("FEEDBACK_FIXTURES", "  ")]).unwrap().fixtures.is_none());
    }
}
