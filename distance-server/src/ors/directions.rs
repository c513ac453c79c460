//! Routing client: route summary between two coordinates.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, instrument};

use crate::domain::{Coordinate, Profile, RouteSummary};

use super::config::OrsConfig;
use super::error::{RouteError, TransportError};
use super::types::{DirectionsRequest, DirectionsResponse, OrsErrorBody};

/// ORS error codes meaning a waypoint could not be matched to a road.
const UNROUTABLE_CODES: [u32; 2] = [2009, 2010];

/// Client for `POST /v2/directions/{profile}`.
#[derive(Debug, Clone)]
pub struct RouterClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouterClient {
    /// Create a new routing client.
    pub fn new(config: &OrsConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        // Directions takes the bare key, no "Bearer" prefix
        let mut api_key =
            HeaderValue::from_str(config.credential.as_str()).map_err(|_| TransportError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        api_key.set_sensitive(true);
        headers.insert(AUTHORIZATION, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Route from `origin` to `destination` with the given profile.
    ///
    /// Distance comes back in kilometres (one decimal) and duration in whole
    /// minutes. A response without `routes[0].summary.{distance,duration}`
    /// is treated as a transport failure.
    #[instrument(skip(self))]
    pub async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: Profile,
    ) -> Result<RouteSummary, RouteError> {
        let url = format!("{}/v2/directions/{}", self.base_url, profile.as_str());
        let request = DirectionsRequest::new(origin, destination);

        debug!("sending directions request");
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if let Ok(payload) = serde_json::from_str::<OrsErrorBody>(&body)
                && payload.code().is_some_and(|c| UNROUTABLE_CODES.contains(&c))
            {
                return Err(RouteError::Unroutable {
                    message: payload.message(),
                });
            }

            return Err(TransportError::from_status(status, &body).into());
        }

        let body = response.text().await.map_err(TransportError::from)?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| TransportError::malformed(e, &body))?;

        let summary = parsed
            .routes
            .first()
            .map(|r| r.summary)
            .ok_or_else(|| TransportError::malformed("no route in response", &body))?;

        let result = RouteSummary::from_raw(summary.distance, summary.duration);
        debug!(
            distance_m = summary.distance,
            duration_s = summary.duration,
            "route received"
        );
        Ok(result)
    }
}
