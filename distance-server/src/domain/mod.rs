//! Domain types for the distance calculator.
//!
//! Coordinates, travel profiles, resolved locations, and route summaries.
//! Everything here is plain data: no I/O, no credentials.

mod coordinate;
mod profile;
mod query;
mod summary;

pub use coordinate::{Coordinate, ResolvedLocation};
pub use profile::{InvalidProfile, Profile};
pub use query::RouteQuery;
pub use summary::RouteSummary;
