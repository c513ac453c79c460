//! Shared configuration for the OpenRouteService clients.

use crate::credential::Credential;

/// Default base URL for the public OpenRouteService API.
pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default country filter for geocoding (ISO 3166 alpha-2).
pub const DEFAULT_COUNTRY: &str = "BR";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the OpenRouteService clients.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    /// API key
    pub credential: Credential,
    /// Base URL for the API, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// `boundary.country` filter for geocoding; `None` searches worldwide
    pub country: Option<String>,
}

impl OrsConfig {
    /// Create a new config with the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            country: Some(DEFAULT_COUNTRY.to_string()),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set or clear the geocoding country filter.
    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country.filter(|c| !c.trim().is_empty());
        self
    }
}
