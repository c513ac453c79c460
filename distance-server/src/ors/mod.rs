//! OpenRouteService HTTP clients.
//!
//! Two thin clients share one [`OrsConfig`]:
//! - [`GeocoderClient`] turns free text into a coordinate and a label
//!   (`GET /geocode/search`, key passed as the `api_key` query parameter)
//! - [`RouterClient`] asks for a route summary between two coordinates
//!   (`POST /v2/directions/{profile}`, key passed in `Authorization`)
//!
//! Neither client retries. A call either completes within the configured
//! timeout or fails.

mod config;
mod directions;
mod error;
mod geocode;
mod types;

pub use config::{DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_TIMEOUT_SECS, OrsConfig};
pub use directions::RouterClient;
pub use error::{GeocodeError, RouteError, TransportError};
pub use geocode::GeocoderClient;
