//! Core library for the skycast weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Clients for the weather, geocoding, forecast and translation APIs
//! - Normalization of the two upstream forecast shapes into one sample type
//! - The bounded, most-recent-first application state and the service that
//!   mutates it in response to user actions
//!
//! It is used by `skycast-web`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod service;
pub mod state;

pub use config::{Config, ProviderConfig, TranslateConfig};
pub use error::{LookupError, TranslateError};
pub use forecast::ForecastStep;
pub use model::{HourlyForecast, HourlySample, StateSnapshot, WeatherCard};
pub use provider::{WeatherBackend, backend_from_config, openweather::OpenWeatherBackend};
pub use provider::translate::Translator;
pub use service::{SearchOutcome, WeatherService};
pub use state::AppState;
