//! Geocoding client: free text to coordinates.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::domain::{Coordinate, ResolvedLocation};

use super::config::OrsConfig;
use super::error::{GeocodeError, TransportError};
use super::types::GeocodeResponse;

/// Client for `GET /geocode/search`.
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    country: Option<String>,
}

impl GeocoderClient {
    /// Create a new geocoding client.
    pub fn new(config: &OrsConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: format!("{}/geocode/search", config.base_url),
            api_key: config.credential.as_str().to_string(),
            country: config.country.clone(),
        })
    }

    /// Resolve `query` to its best candidate.
    ///
    /// Returns the first feature's coordinates exactly as sent, and its label.
    /// When the service gives no label, the query text is used instead.
    #[instrument(skip(self))]
    pub async fn geocode(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        let mut params: Vec<(&str, &str)> = vec![("text", query), ("size", "1")];
        if let Some(country) = &self.country {
            params.push(("boundary.country", country.as_str()));
        }
        params.push(("api_key", self.api_key.as_str()));

        debug!("sending geocode request");
        let response = self
            .http
            .get(&self.url)
            .query(&params)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::from_status(status, &body).into());
        }

        let body = response.text().await.map_err(TransportError::from)?;

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| TransportError::malformed(e, &body))?;

        let Some(first) = parsed.features.into_iter().next() else {
            debug!("no geocoding candidates");
            return Err(GeocodeError::NotFound {
                query: query.to_string(),
            });
        };

        let coordinate = Coordinate::from(first.geometry.coordinates);
        let label = first
            .properties
            .label
            .unwrap_or_else(|| query.to_string());

        debug!(%coordinate, %label, "geocoded");
        Ok(ResolvedLocation::new(coordinate, label))
    }
}
