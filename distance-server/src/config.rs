//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::credential::{Credential, CredentialSource, DEFAULT_SECRETS_FILE};
use crate::ors::{DEFAULT_BASE_URL, DEFAULT_COUNTRY, OrsConfig};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors in startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something unusable
    #[error("invalid {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// OpenRouteService base URL
    pub ors_base_url: String,
    /// Geocoding country filter; `None` searches worldwide
    pub country: Option<String>,
    /// Secrets file consulted when `ORS_API_KEY` is unset
    pub secrets_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            ors_base_url: DEFAULT_BASE_URL.to_string(),
            country: Some(DEFAULT_COUNTRY.to_string()),
            secrets_path: PathBuf::from(DEFAULT_SECRETS_FILE),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration using `env` in place of the process environment.
    ///
    /// Unset or blank variables keep their defaults. `ORS_COUNTRY=-` disables
    /// the country filter.
    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| env(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(addr) = var("BIND_ADDR") {
            config.bind_addr = addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    name: "BIND_ADDR",
                    message: format!("{addr:?}: {e}"),
                }
            })?;
        }

        if let Some(url) = var("ORS_BASE_URL") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    name: "ORS_BASE_URL",
                    message: format!("{url:?} is not an http(s) URL"),
                });
            }
            config.ors_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(country) = var("ORS_COUNTRY") {
            config.country = (country != "-").then_some(country);
        }

        if let Some(path) = var("ORS_SECRETS_FILE") {
            config.secrets_path = PathBuf::from(path);
        }

        if let Some(dir) = var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Where to look for the API key.
    pub fn credential_source(&self) -> CredentialSource {
        CredentialSource::new(&self.secrets_path)
    }

    /// Client configuration for the given credential.
    pub fn ors_config(&self, credential: Credential) -> OrsConfig {
        OrsConfig::new(credential)
            .with_base_url(&self.ors_base_url)
            .with_country(self.country.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.ors_base_url, "https://api.openrouteservice.org");
        assert_eq!(config.country.as_deref(), Some("BR"));
        assert_eq!(config.secrets_path, PathBuf::from("secrets.toml"));
    }

    #[test]
    fn overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0:8501"),
            ("ORS_BASE_URL", "http://localhost:8080/ors/"),
            ("ORS_COUNTRY", "PT"),
            ("ORS_SECRETS_FILE", "/run/secrets/ors.toml"),
            ("STATIC_DIR", "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8501");
        assert_eq!(config.ors_base_url, "http://localhost:8080/ors");
        assert_eq!(config.country.as_deref(), Some("PT"));
        assert_eq!(config.secrets_path, PathBuf::from("/run/secrets/ors.toml"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn dash_disables_country_filter() {
        let config = AppConfig::from_lookup(lookup(&[("ORS_COUNTRY", "-")])).unwrap();
        assert_eq!(config.country, None);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "  ")])).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn invalid_bind_addr() {
        let err = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid BIND_ADDR"));
    }

    #[test]
    fn invalid_base_url() {
        let err = AppConfig::from_lookup(lookup(&[("ORS_BASE_URL", "ftp://x")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid ORS_BASE_URL"));
    }

    #[test]
    fn ors_config_carries_settings() {
        let config = AppConfig::from_lookup(lookup(&[("ORS_COUNTRY", "AR")])).unwrap();
        let ors = config.ors_config(Credential::new("k"));
        assert_eq!(ors.country.as_deref(), Some("AR"));
        assert_eq!(ors.base_url, config.ors_base_url);
        assert_eq!(ors.timeout_secs, 30);
    }
}
