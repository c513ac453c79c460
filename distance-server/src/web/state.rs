//! Application state for the web layer.

use std::sync::Arc;

use crate::calculate::OrsCalculator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key was resolved; every calculation is then refused
    /// without touching the network.
    pub calculator: Option<Arc<OrsCalculator>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(calculator: Option<OrsCalculator>) -> Self {
        Self {
            calculator: calculator.map(Arc::new),
        }
    }

    /// Whether the calculate button should be enabled.
    pub fn has_credential(&self) -> bool {
        self.calculator.is_some()
    }
}
