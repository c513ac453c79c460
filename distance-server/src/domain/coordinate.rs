//! Geographic coordinates and geocoded locations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 point in degrees.
///
/// Always exchanged with OpenRouteService as `[longitude, latitude]`.
/// No range validation is done here; the remote service rejects points it
/// cannot use.
///
/// # Examples
///
/// ```
/// use distance_server::domain::Coordinate;
///
/// let uberlandia = Coordinate::new(-48.2772, -18.9186);
/// assert_eq!(uberlandia.to_lon_lat(), [-48.2772, -18.9186]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude (in that order).
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// The `[lon, lat]` pair as sent on the wire.
    pub const fn to_lon_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lon, self.lat)
    }
}

/// A coordinate together with the label the geocoder gave it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    pub label: String,
}

impl ResolvedLocation {
    pub fn new(coordinate: Coordinate, label: impl Into<String>) -> Self {
        Self {
            coordinate,
            label: label.into(),
        }
    }
}
