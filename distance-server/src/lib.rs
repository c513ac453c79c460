//! Road distance calculator server.
//!
//! A web application that answers: "how far is it by road from here to
//! there, and how long does it take?" Geocoding and routing are delegated
//! to OpenRouteService.

pub mod calculate;
pub mod config;
pub mod credential;
pub mod domain;
pub mod ors;
pub mod web;
