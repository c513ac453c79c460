//! Askama templates for the web frontend.

use askama::Template;

use crate::calculate::Calculation;
use crate::credential::API_KEY_NAME;
use crate::domain::{Coordinate, Profile};

use super::dto::{CalculateForm, InputMode};
use super::format::{format_km, format_minutes};

/// Origin shown in the form before the user types anything.
pub const DEFAULT_ORIGIN_TEXT: &str = "Uberlândia, MG";
pub const DEFAULT_DESTINATION_TEXT: &str = "Campinas, SP";
pub const DEFAULT_ORIGIN: Coordinate = Coordinate::new(-48.2772, -18.9186);
pub const DEFAULT_DESTINATION: Coordinate = Coordinate::new(-47.0608, -22.9056);

/// The calculator page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: FormView,
    /// When false the button is disabled and setup help is shown.
    pub has_credential: bool,
    pub key_name: &'static str,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

impl IndexTemplate {
    pub fn new(form: FormView, has_credential: bool) -> Self {
        Self {
            form,
            has_credential,
            key_name: API_KEY_NAME,
            result: None,
            error: None,
        }
    }

    pub fn with_result(mut self, result: ResultView) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Form field values, as strings ready to drop into inputs.
#[derive(Debug, Clone)]
pub struct FormView {
    pub text_mode: bool,
    pub profiles: Vec<ProfileOption>,
    pub origin: String,
    pub destination: String,
    pub origin_lon: String,
    pub origin_lat: String,
    pub destination_lon: String,
    pub destination_lat: String,
}

impl FormView {
    /// A fresh form in the given mode.
    pub fn defaults(mode: InputMode) -> Self {
        Self {
            text_mode: mode == InputMode::Text,
            profiles: ProfileOption::all(Profile::default()),
            origin: DEFAULT_ORIGIN_TEXT.to_string(),
            destination: DEFAULT_DESTINATION_TEXT.to_string(),
            origin_lon: format!("{:.6}", DEFAULT_ORIGIN.lon),
            origin_lat: format!("{:.6}", DEFAULT_ORIGIN.lat),
            destination_lon: format!("{:.6}", DEFAULT_DESTINATION.lon),
            destination_lat: format!("{:.6}", DEFAULT_DESTINATION.lat),
        }
    }

    /// Echo a submitted form back, filling gaps with defaults.
    ///
    /// An unparseable mode or profile falls back to its default here; the
    /// handler reports it separately.
    pub fn from_form(form: &CalculateForm) -> Self {
        let defaults = Self::defaults(form.input_mode().unwrap_or_default());
        let keep = |value: &Option<String>, fallback: String| value.clone().unwrap_or(fallback);
        Self {
            text_mode: defaults.text_mode,
            profiles: ProfileOption::all(form.profile().unwrap_or_default()),
            origin: keep(&form.origin, defaults.origin),
            destination: keep(&form.destination, defaults.destination),
            origin_lon: keep(&form.origin_lon, defaults.origin_lon),
            origin_lat: keep(&form.origin_lat, defaults.origin_lat),
            destination_lon: keep(&form.destination_lon, defaults.destination_lon),
            destination_lat: keep(&form.destination_lat, defaults.destination_lat),
        }
    }
}

/// One entry of the profile selector.
#[derive(Debug, Clone)]
pub struct ProfileOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl ProfileOption {
    fn all(selected: Profile) -> Vec<Self> {
        Profile::ALL
            .into_iter()
            .map(|p| ProfileOption {
                value: p.as_str(),
                label: p.label(),
                selected: p == selected,
            })
            .collect()
    }
}

/// A successful calculation, formatted for display.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub headline: String,
    pub distance: String,
    pub duration: String,
}

impl ResultView {
    pub fn from_calculation(calc: &Calculation) -> Self {
        let headline = match &calc.labels {
            Some(labels) => format!("Route: {} → {}", labels.origin, labels.destination),
            None => "Route calculated from coordinates (lon/lat).".to_string(),
        };
        Self {
            headline,
            distance: format_km(calc.summary.distance_km),
            duration: format_minutes(calc.summary.duration_min),
        }
    }
}
