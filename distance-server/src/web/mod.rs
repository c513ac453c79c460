//! Web layer for the distance calculator.
//!
//! Serves the calculator page, the form handler behind its button, and a
//! JSON endpoint for programmatic use.

mod dto;
mod format;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use format::{format_km, format_minutes};
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
