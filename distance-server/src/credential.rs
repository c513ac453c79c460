//! API credential resolution.
//!
//! The OpenRouteService key is looked up once at startup, first in the
//! environment and then in a local TOML secrets file. A missing key is not an
//! error: it yields an empty [`Credential`], which disables every network
//! operation.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Name of the environment variable and of the secrets-file key.
pub const API_KEY_NAME: &str = "ORS_API_KEY";

/// Default location of the secrets file, relative to the working directory.
pub const DEFAULT_SECRETS_FILE: &str = "secrets.toml";

/// An OpenRouteService API key.
///
/// Immutable once resolved. `Debug` never prints the key itself.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key, trimming surrounding whitespace.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().trim().to_string())
    }

    /// The empty credential.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no key was resolved.
    pub fn is_missing(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_missing() {
            f.write_str("Credential(<missing>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

/// Where to look for the key.
#[derive(Debug, Clone)]
pub struct CredentialSource {
    /// Path of the TOML secrets file consulted when the environment has no key.
    pub secrets_path: PathBuf,
}

impl Default for CredentialSource {
    fn default() -> Self {
        Self {
            secrets_path: PathBuf::from(DEFAULT_SECRETS_FILE),
        }
    }
}

impl CredentialSource {
    pub fn new(secrets_path: impl Into<PathBuf>) -> Self {
        Self {
            secrets_path: secrets_path.into(),
        }
    }

    /// Resolve the key from the process environment, then the secrets file.
    pub fn resolve(&self) -> Credential {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve the key using `env` in place of the process environment.
    ///
    /// Blank values count as absent. Any failure to read or parse the
    /// secrets file also counts as absent.
    pub fn resolve_with(&self, env: impl Fn(&str) -> Option<String>) -> Credential {
        if let Some(key) = env(API_KEY_NAME).map(Credential::new)
            && !key.is_missing()
        {
            debug!("using API key from environment");
            return key;
        }

        match read_secrets_file(&self.secrets_path) {
            Some(key) if !key.is_missing() => {
                debug!(path = %self.secrets_path.display(), "using API key from secrets file");
                key
            }
            _ => Credential::missing(),
        }
    }
}

/// Resolve the key with the default sources.
pub fn resolve_credential() -> Credential {
    CredentialSource::default().resolve()
}

fn read_secrets_file(path: &Path) -> Option<Credential> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "secrets file not readable");
            return None;
        }
    };

    let table: toml::Table = match contents.parse() {
        Ok(t) => t,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "secrets file is not valid TOML");
            return None;
        }
    };

    table
        .get(API_KEY_NAME)
        .and_then(toml::Value::as_str)
        .map(Credential::new)
}
