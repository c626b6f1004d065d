use std::env;

use anyhow::{Context, Result};
use dotenvy::dotenv;

const MEMORY_SCHEME: &str = "memory://";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Access key for the store; replaces any password embedded in `database_url`.
    pub database_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_key: lookup("DATABASE_KEY").filter(|k| !k.is_empty()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url.starts_with(MEMORY_SCHEME)
    }

    pub fn server_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("DATABASE_URL", "mysql://localhost/attendance")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_dir, "logs");
        assert!(config.database_key.is_none());
        assert!(!config.uses_memory_store());
    }

    #[test]
    fn database_url_is_required() {
        let err = config_from(&[("PORT", "8080")]).err().unwrap();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = config_from(&[("DATABASE_URL", "memory://"), ("PORT", "http")])
            .err()
            .unwrap();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "memory://"),
            ("DATABASE_KEY", "s3cret"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
        ])
        .unwrap();

        assert!(config.uses_memory_store());
        assert_eq!(config.database_key.as_deref(), Some("s3cret"));
        assert_eq!(config.server_addr(), ("127.0.0.1".to_string(), 8080));
    }
}
