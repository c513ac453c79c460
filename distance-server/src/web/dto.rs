//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::calculate::{Calculation, RouteLabels};
use crate::domain::{Coordinate, InvalidProfile, Profile, RouteQuery};

/// How the user enters the two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Address or postal code
    Text,
    /// Longitude/latitude
    #[default]
    Coordinates,
}

impl InputMode {
    /// Parse the value of a `mode` field.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim() {
            "text" => Ok(InputMode::Text),
            "coordinates" => Ok(InputMode::Coordinates),
            other => Err(format!("unknown input mode: {other}")),
        }
    }
}

/// Query string of the calculator page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub mode: Option<InputMode>,
}

/// Form posted by the calculate button.
///
/// Every field arrives as text so that bad input can be reported on the page
/// instead of as a bare extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateForm {
    pub mode: Option<String>,
    pub profile: Option<String>,

    /// Origin address (text mode)
    pub origin: Option<String>,
    /// Destination address (text mode)
    pub destination: Option<String>,

    pub origin_lon: Option<String>,
    pub origin_lat: Option<String>,
    pub destination_lon: Option<String>,
    pub destination_lat: Option<String>,
}

impl CalculateForm {
    /// The selected input mode, coordinates when absent.
    pub fn input_mode(&self) -> Result<InputMode, String> {
        self.mode
            .as_deref()
            .map_or(Ok(InputMode::default()), InputMode::parse)
    }

    /// The selected vehicle profile, heavy vehicle when absent.
    pub fn profile(&self) -> Result<Profile, String> {
        self.profile
            .as_deref()
            .map_or(Ok(Profile::default()), |p| {
                p.parse().map_err(|e: InvalidProfile| e.to_string())
            })
    }

    /// Turn the submitted fields into a query for the selected mode.
    pub fn to_query(&self) -> Result<RouteQuery, String> {
        match self.input_mode()? {
            InputMode::Text => {
                let origin = required_text("origin", self.origin.as_deref())?;
                let destination = required_text("destination", self.destination.as_deref())?;
                Ok(RouteQuery::text(origin, destination))
            }
            InputMode::Coordinates => {
                let origin = Coordinate::new(
                    required_number("origin longitude", self.origin_lon.as_deref())?,
                    required_number("origin latitude", self.origin_lat.as_deref())?,
                );
                let destination = Coordinate::new(
                    required_number("destination longitude", self.destination_lon.as_deref())?,
                    required_number("destination latitude", self.destination_lat.as_deref())?,
                );
                Ok(RouteQuery::coordinates(origin, destination))
            }
        }
    }
}

fn required_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("{field} is required"))
}

fn required_number(field: &str, value: Option<&str>) -> Result<f64, String> {
    let raw = required_text(field, value)?;
    // Accept a decimal comma as typed in Brazilian locales
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{field} is not a number: {raw}"))
}

/// JSON request for `/api/route`.
#[derive(Debug, Deserialize)]
pub struct RouteApiRequest {
    #[serde(flatten)]
    pub query: RouteApiQuery,

    #[serde(default)]
    pub profile: Profile,
}

/// Endpoints of a JSON request, tagged by `mode`.
#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RouteApiQuery {
    Text {
        origin: String,
        destination: String,
    },
    Coordinates {
        /// `[lon, lat]`
        origin: [f64; 2],
        /// `[lon, lat]`
        destination: [f64; 2],
    },
}

impl RouteApiQuery {
    pub fn to_query(&self) -> Result<RouteQuery, String> {
        match self {
            RouteApiQuery::Text {
                origin,
                destination,
            } => Ok(RouteQuery::text(
                required_text("origin", Some(origin.as_str()))?,
                required_text("destination", Some(destination.as_str()))?,
            )),
            RouteApiQuery::Coordinates {
                origin,
                destination,
            } => {
                if origin.iter().chain(destination).any(|v| !v.is_finite()) {
                    return Err("coordinates must be finite numbers".to_string());
                }
                Ok(RouteQuery::coordinates(
                    Coordinate::from(*origin),
                    Coordinate::from(*destination),
                ))
            }
        }
    }
}

/// JSON response for `/api/route`.
#[derive(Debug, Serialize)]
pub struct RouteApiResponse {
    pub distance_km: f64,
    pub duration_min: u64,
    pub profile: Profile,
    /// `[lon, lat]`
    pub origin: [f64; 2],
    /// `[lon, lat]`
    pub destination: [f64; 2],
    /// Geocoder labels, text mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<RouteLabels>,
}

impl From<Calculation> for RouteApiResponse {
    fn from(calc: Calculation) -> Self {
        Self {
            distance_km: calc.summary.distance_km,
            duration_min: calc.summary.duration_min,
            profile: calc.profile,
            origin: calc.origin.to_lon_lat(),
            destination: calc.destination.to_lon_lat(),
            labels: calc.labels,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate_form() -> CalculateForm {
        CalculateForm {
            mode: Some("coordinates".into()),
            origin_lon: Some("-48.2772".into()),
            origin_lat: Some("-18.918600".into()),
            destination_lon: Some("-47,0608".into()),
            destination_lat: Some(" -22.9056 ".into()),
            ..Default::default()
        }
    }

    #[test]
    fn coordinate_form_parses_in_lon_lat_order() {
        let query = coordinate_form().to_query().unwrap();
        assert_eq!(
            query,
            RouteQuery::coordinates(
                Coordinate::new(-48.2772, -18.9186),
                Coordinate::new(-47.0608, -22.9056),
            )
        );
    }

    #[test]
    fn coordinate_form_rejects_garbage() {
        let mut form = coordinate_form();
        form.origin_lat = Some("south".into());
        assert_eq!(
            form.to_query().unwrap_err(),
            "origin latitude is not a number: south"
        );

        form.origin_lat = None;
        assert_eq!(form.to_query().unwrap_err(), "origin latitude is required");

        form.origin_lat = Some("NaN".into());
        assert!(form.to_query().is_err());
    }

    #[test]
    fn text_form_requires_both_fields() {
        let form = CalculateForm {
            mode: Some("text".into()),
            origin: Some("Uberlândia, MG".into()),
            destination: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(form.to_query().unwrap_err(), "destination is required");
    }

    #[test]
    fn text_form_trims() {
        let form = CalculateForm {
            mode: Some("text".into()),
            origin: Some(" 38400-000 ".into()),
            destination: Some("Campinas, SP".into()),
            ..Default::default()
        };
        assert_eq!(
            form.to_query().unwrap(),
            RouteQuery::text("38400-000", "Campinas, SP")
        );
    }

    #[test]
    fn form_mode_and_profile_default_when_absent() {
        let form = CalculateForm::default();
        assert_eq!(form.input_mode(), Ok(InputMode::Coordinates));
        assert_eq!(form.profile(), Ok(Profile::DrivingHgv));
    }

    #[test]
    fn form_rejects_unknown_mode_and_profile() {
        let mut form = coordinate_form();
        form.profile = Some("cycling-road".into());
        assert_eq!(
            form.profile().unwrap_err(),
            "unknown vehicle profile: cycling-road"
        );

        form.mode = Some("walking".into());
        assert_eq!(form.input_mode().unwrap_err(), "unknown input mode: walking");
        assert_eq!(form.to_query().unwrap_err(), "unknown input mode: walking");
    }

    #[test]
    fn form_profile_parses_wire_name() {
        let form = CalculateForm {
            profile: Some("driving-car".into()),
            ..Default::default()
        };
        assert_eq!(form.profile(), Ok(Profile::DrivingCar));
    }

    #[test]
    fn api_request_text_mode() {
        let req: RouteApiRequest = serde_json::from_str(
            r#"{"mode":"text","origin":"Uberlândia, MG","destination":"Campinas, SP","profile":"driving-car"}"#,
        )
        .unwrap();
        assert_eq!(req.profile, Profile::DrivingCar);
        assert_eq!(
            req.query.to_query().unwrap(),
            RouteQuery::text("Uberlândia, MG", "Campinas, SP")
        );
    }

    #[test]
    fn api_request_coordinate_mode_defaults_profile() {
        let req: RouteApiRequest = serde_json::from_str(
            r#"{"mode":"coordinates","origin":[-48.2772,-18.9186],"destination":[-47.0608,-22.9056]}"#,
        )
        .unwrap();
        assert_eq!(req.profile, Profile::DrivingHgv);
        assert!(matches!(
            req.query.to_query().unwrap(),
            RouteQuery::Coordinates { .. }
        ));
    }

    #[test]
    fn api_request_unknown_profile_rejected() {
        let res: Result<RouteApiRequest, _> = serde_json::from_str(
            r#"{"mode":"coordinates","origin":[0,0],"destination":[1,1],"profile":"foot-walking"}"#,
        );
        assert!(res.is_err());
    }
}
