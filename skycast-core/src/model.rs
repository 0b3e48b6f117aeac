use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::forecast::ForecastStep;

/// One city's current-conditions snapshot, as shown on a dashboard card.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherCard {
    /// Display name resolved by the provider, not the raw user query.
    pub name: String,
    /// Icon image derived from the payload's icon code, when one is present.
    pub icon_url: Option<String>,
    /// The full upstream payload. The dashboard reads arbitrary fields from
    /// it; the core only ever looks at the name and icon code.
    pub raw: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
}

/// One normalized point of a forecast series. Always carries the same fixed
/// fields regardless of which upstream endpoint produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySample {
    /// Epoch seconds.
    pub timestamp: i64,
    /// Metric units.
    pub temperature: f64,
    /// Percent.
    pub humidity: u8,
    /// Metric units.
    pub wind_speed: f64,
    /// Provider-defined descriptor objects, passed through verbatim.
    pub weather_condition: serde_json::Value,
}

/// One city's short-term forecast series, chronological as returned upstream.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyForecast {
    /// The geocoder's canonical name. May differ from the name the
    /// current-weather endpoint resolved for the same query.
    pub city_name: String,
    pub samples: Vec<HourlySample>,
}

/// The full application state handed to the rendering layer, always complete.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub cards: Vec<WeatherCard>,
    pub hourly_cards: Vec<HourlyForecast>,
    pub history: Vec<String>,
    pub forecast_step: ForecastStep,
}
