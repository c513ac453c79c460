//! Wire types for OpenRouteService requests and responses.
//!
//! Only the fields this crate reads are modelled. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::domain::Coordinate;

/// Body of `GET /geocode/search`.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub features: Vec<Feature>,
}

/// One geocoding candidate (GeoJSON feature).
#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: FeatureProperties,
}

/// GeoJSON point geometry, `[lon, lat]`.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: [f64; 2],
}

#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    pub label: Option<String>,
}

/// Body of `POST /v2/directions/{profile}`.
#[derive(Debug, Serialize)]
pub struct DirectionsRequest {
    pub coordinates: [[f64; 2]; 2],
}

impl DirectionsRequest {
    /// Waypoints in order: origin, then destination.
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            coordinates: [origin.to_lon_lat(), destination.to_lon_lat()],
        }
    }
}

/// Response of `POST /v2/directions/{profile}` (JSON format).
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    pub summary: DirectionsSummary,
}

/// Raw route totals: metres and seconds.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DirectionsSummary {
    pub distance: f64,
    pub duration: f64,
}

/// Error payloads returned with non-success statuses.
///
/// The directions API nests a code and message, the gateway sends a bare
/// string, and the geocoder lists messages.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrsErrorBody {
    Detailed { error: OrsErrorDetail },
    Plain { error: String },
    Geocoding { geocoding: GeocodingErrors },
}

#[derive(Debug, Deserialize)]
pub struct OrsErrorDetail {
    pub code: u32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingErrors {
    #[serde(default)]
    pub errors: Vec<String>,
}

impl OrsErrorBody {
    /// Numeric ORS error code, when the payload carries one.
    pub fn code(&self) -> Option<u32> {
        match self {
            OrsErrorBody::Detailed { error } => Some(error.code),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            OrsErrorBody::Detailed { error } => error.message.clone(),
            OrsErrorBody::Plain { error } => error.clone(),
            OrsErrorBody::Geocoding { geocoding } => geocoding.errors.join("; "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_geocode_response() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-48.2772, -18.9186] },
                "properties": { "label": "Uberlândia, MG, Brazil", "confidence": 1 }
            }]
        }"#;
        let resp: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.features.len(), 1);
        assert_eq!(resp.features[0].geometry.coordinates, [-48.2772, -18.9186]);
        assert_eq!(
            resp.features[0].properties.label.as_deref(),
            Some("Uberlândia, MG, Brazil")
        );
    }

    #[test]
    fn feature_without_properties() {
        let json = r#"{"features":[{"geometry":{"coordinates":[1.0,2.0]}}]}"#;
        let resp: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.features[0].properties.label, None);
    }

    #[test]
    fn missing_features_is_an_error() {
        assert!(serde_json::from_str::<GeocodeResponse>(r#"{"type":"FeatureCollection"}"#).is_err());
    }

    #[test]
    fn directions_request_shape() {
        let req = DirectionsRequest::new(
            Coordinate::new(-48.2772, -18.9186),
            Coordinate::new(-47.0608, -22.9056),
        );
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "coordinates": [[-48.2772, -18.9186], [-47.0608, -22.9056]] })
        );
    }

    #[test]
    fn directions_summary_requires_both_fields() {
        let ok = r#"{"routes":[{"summary":{"distance":145230.0,"duration":6120.0}}]}"#;
        let resp: DirectionsResponse = serde_json::from_str(ok).unwrap();
        assert_eq!(resp.routes[0].summary.distance, 145230.0);

        let missing = r#"{"routes":[{"summary":{"distance":145230.0}}]}"#;
        assert!(serde_json::from_str::<DirectionsResponse>(missing).is_err());
    }

    #[test]
    fn error_body_variants() {
        let detailed: OrsErrorBody = serde_json::from_str(
            r#"{"error":{"code":2010,"message":"Could not find routable point"},"info":{}}"#,
        )
        .unwrap();
        assert_eq!(detailed.code(), Some(2010));
        assert_eq!(detailed.message(), "Could not find routable point");

        let plain: OrsErrorBody =
            serde_json::from_str(r#"{"error":"Access to this API has been disallowed"}"#).unwrap();
        assert_eq!(plain.code(), None);
        assert_eq!(plain.message(), "Access to this API has been disallowed");

        let geo: OrsErrorBody =
            serde_json::from_str(r#"{"geocoding":{"errors":["text is required","bad size"]}}"#)
                .unwrap();
        assert_eq!(geo.message(), "text is required; bad size");
    }
}
