//! OpenRouteService client error types.

use super::types::OrsErrorBody;

/// Failures talking to the remote service, shared by both clients.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network failure, timeout, or client construction failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Key rejected by the service
    #[error("unauthorized: check ORS_API_KEY")]
    Unauthorized,

    /// Quota or rate limit exceeded
    #[error("rate limited by OpenRouteService")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body lacked the expected fields
    #[error("malformed response: {message}")]
    Malformed {
        message: String,
        body: Option<String>,
    },
}

impl TransportError {
    /// Build an error for a non-success status.
    ///
    /// Uses the service's own error message when the body carries one.
    pub(crate) fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return TransportError::Unauthorized;
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return TransportError::RateLimited;
        }

        let message = serde_json::from_str::<OrsErrorBody>(body)
            .ok()
            .map(|b| b.message())
            .unwrap_or_else(|| body.chars().take(500).collect());

        TransportError::Api {
            status: status.as_u16(),
            message,
        }
    }

    pub(crate) fn malformed(err: impl std::fmt::Display, body: &str) -> Self {
        TransportError::Malformed {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

/// Errors from [`GeocoderClient::geocode`](super::GeocoderClient::geocode).
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The service returned no candidate for the query
    #[error("address not found: {query}")]
    NotFound { query: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors from [`RouterClient::directions`](super::RouterClient::directions).
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// A waypoint could not be snapped to the road network
    #[error("point not routable: {message}")]
    Unroutable { message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}
