//! What the user asked to route between.

use super::Coordinate;

/// Origin and destination of a calculation.
///
/// The input mode applies to both endpoints: either both are free text to be
/// geocoded, or both are explicit coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteQuery {
    /// Addresses or postal codes, geocoded before routing.
    Text {
        origin: String,
        destination: String,
    },

    /// Explicit coordinates; geocoding is skipped.
    Coordinates {
        origin: Coordinate,
        destination: Coordinate,
    },
}

impl RouteQuery {
    pub fn text(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        RouteQuery::Text {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub const fn coordinates(origin: Coordinate, destination: Coordinate) -> Self {
        RouteQuery::Coordinates {
            origin,
            destination,
        }
    }
}
