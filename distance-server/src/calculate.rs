//! Distance calculation flow.
//!
//! Ties the geocoder and router together for one user action:
//! - text mode geocodes the origin, then the destination, then routes
//! - coordinate mode routes directly and never geocodes
//!
//! Calls are made strictly one after another. The first failure ends the
//! flow and is reported as a single [`CalculateError`].

use std::fmt;
use std::future::Future;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Coordinate, Profile, ResolvedLocation, RouteQuery, RouteSummary};
use crate::ors::{GeocodeError, GeocoderClient, OrsConfig, RouteError, RouterClient, TransportError};

/// Something that can turn free text into a location.
pub trait Geocoder: Send + Sync {
    fn geocode(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<ResolvedLocation, GeocodeError>> + Send;
}

/// Something that can summarise a route between two points.
pub trait Router: Send + Sync {
    fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: Profile,
    ) -> impl Future<Output = Result<RouteSummary, RouteError>> + Send;
}

impl Geocoder for GeocoderClient {
    fn geocode(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<ResolvedLocation, GeocodeError>> + Send {
        GeocoderClient::geocode(self, query)
    }
}

impl Router for RouterClient {
    fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: Profile,
    ) -> impl Future<Output = Result<RouteSummary, RouteError>> + Send {
        RouterClient::directions(self, origin, destination, profile)
    }
}

/// Which end of the route a geocoding failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Broad failure category, used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No credential; nothing was sent
    Config,
    /// An address matched nothing
    NotFound,
    /// The remote service failed or answered nonsense
    Transport,
}

/// Why a calculation failed.
#[derive(Debug, thiserror::Error)]
pub enum CalculateError {
    /// No API key was resolved at startup
    #[error("no API key configured: set ORS_API_KEY or add it to the secrets file")]
    MissingCredential,

    /// Geocoding one of the endpoints failed
    #[error("{endpoint}: {source}")]
    Geocode {
        endpoint: Endpoint,
        #[source]
        source: GeocodeError,
    },

    /// Routing failed
    #[error(transparent)]
    Route(#[from] RouteError),
}

impl CalculateError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CalculateError::MissingCredential => FailureKind::Config,
            CalculateError::Geocode {
                source: GeocodeError::NotFound { .. },
                ..
            } => FailureKind::NotFound,
            CalculateError::Geocode { .. } | CalculateError::Route(_) => FailureKind::Transport,
        }
    }
}

/// Labels of the two geocoded endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLabels {
    pub origin: String,
    pub destination: String,
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub profile: Profile,
    /// Present in text mode only.
    pub labels: Option<RouteLabels>,
    pub summary: RouteSummary,
}

/// Runs calculations against a geocoder and a router.
#[derive(Debug, Clone)]
pub struct Calculator<G, R> {
    geocoder: G,
    router: R,
}

/// The calculator wired to OpenRouteService.
pub type OrsCalculator = Calculator<GeocoderClient, RouterClient>;

impl OrsCalculator {
    /// Build both clients from one configuration.
    ///
    /// Returns `Ok(None)` when the configuration has no credential, so that
    /// callers cannot issue requests that are bound to be rejected.
    pub fn from_config(config: &OrsConfig) -> Result<Option<Self>, TransportError> {
        if config.credential.is_missing() {
            return Ok(None);
        }
        Ok(Some(Calculator::new(
            GeocoderClient::new(config)?,
            RouterClient::new(config)?,
        )))
    }
}

impl<G: Geocoder, R: Router> Calculator<G, R> {
    pub fn new(geocoder: G, router: R) -> Self {
        Self { geocoder, router }
    }

    /// Resolve the query if needed and fetch the route summary.
    pub async fn calculate(
        &self,
        query: &RouteQuery,
        profile: Profile,
    ) -> Result<Calculation, CalculateError> {
        let (origin, destination, labels) = match query {
            RouteQuery::Text {
                origin,
                destination,
            } => {
                let from = self.resolve(Endpoint::Origin, origin).await?;
                let to = self.resolve(Endpoint::Destination, destination).await?;
                (
                    from.coordinate,
                    to.coordinate,
                    Some(RouteLabels {
                        origin: from.label,
                        destination: to.label,
                    }),
                )
            }
            RouteQuery::Coordinates {
                origin,
                destination,
            } => (*origin, *destination, None),
        };

        let summary = self
            .router
            .directions(origin, destination, profile)
            .await
            .inspect_err(|e| warn!(error = %e, %profile, "routing failed"))?;

        debug!(?summary, "calculation complete");
        Ok(Calculation {
            origin,
            destination,
            profile,
            labels,
            summary,
        })
    }

    async fn resolve(
        &self,
        endpoint: Endpoint,
        query: &str,
    ) -> Result<ResolvedLocation, CalculateError> {
        self.geocoder.geocode(query).await.map_err(|source| {
            warn!(%endpoint, error = %source, "geocoding failed");
            CalculateError::Geocode { endpoint, source }
        })
    }
}
