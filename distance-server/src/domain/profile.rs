//! Vehicle profiles understood by the routing endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown profile name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle profile: {0}")]
pub struct InvalidProfile(pub String);

/// Travel profile selecting the routing endpoint variant.
///
/// The set is fixed. The wire name is the path segment appended to the
/// directions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profile {
    /// Heavy goods vehicle (truck).
    #[default]
    #[serde(rename = "driving-hgv")]
    DrivingHgv,

    /// Car or other light vehicle.
    #[serde(rename = "driving-car")]
    DrivingCar,
}

impl Profile {
    /// Every selectable profile, in display order.
    pub const ALL: [Profile; 2] = [Profile::DrivingHgv, Profile::DrivingCar];

    /// The routing service's name for this profile.
    pub const fn as_str(self) -> &'static str {
        match self {
            Profile::DrivingHgv => "driving-hgv",
            Profile::DrivingCar => "driving-car",
        }
    }

    /// Human-readable label for selectors.
    pub const fn label(self) -> &'static str {
        match self {
            Profile::DrivingHgv => "Truck (heavy) – driving-hgv",
            Profile::DrivingCar => "Car/Light – driving-car",
        }
    }
}

impl FromStr for Profile {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| InvalidProfile(s.to_string()))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_heavy_vehicle() {
        assert_eq!(Profile::default(), Profile::DrivingHgv);
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("driving-hgv".parse::<Profile>(), Ok(Profile::DrivingHgv));
        assert_eq!("driving-car".parse::<Profile>(), Ok(Profile::DrivingCar));
        assert_eq!(" driving-car ".parse::<Profile>(), Ok(Profile::DrivingCar));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "cycling-road".parse::<Profile>().unwrap_err();
        assert_eq!(err.to_string(), "unknown vehicle profile: cycling-road");
        assert!("DRIVING-HGV".parse::<Profile>().is_err());
    }

    #[test]
    fn as_str_roundtrips() {
        for p in Profile::ALL {
            assert_eq!(p.as_str().parse::<Profile>(), Ok(p));
            assert_eq!(p.to_string(), p.as_str());
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Profile::DrivingCar).unwrap();
        assert_eq!(json, "\"driving-car\"");
        let back: Profile = serde_json::from_str("\"driving-hgv\"").unwrap();
        assert_eq!(back, Profile::DrivingHgv);
    }
}
