//! Weather tools backed by the OpenWeatherMap REST API.
//!
//! `api` owns the outbound calls, `format` turns the raw payloads into
//! the display text the tools return.

pub mod api;
pub mod format;

pub use api::{Location, WeatherClient};
