use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    error::LookupError,
    forecast::{self, ForecastSlot, ForecastStep, OneCallHour},
    model::{HourlyForecast, WeatherCard},
};

use super::WeatherBackend;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// One timeout for every call. The upstream app capped only the
/// current-weather request; a uniform cap is applied here instead.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeather HTTP APIs: current weather, geocoding and the
/// two forecast variants.
#[derive(Debug, Clone)]
pub struct OpenWeatherBackend {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenWeatherBackend {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host. Tests use this to talk to a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET a provider endpoint and deserialize its JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| LookupError::Malformed { endpoint, source })
    }

    async fn current_weather(&self, query: &str) -> Result<WeatherCard, LookupError> {
        let raw: serde_json::Value = self
            .get_json("current weather", "/data/2.5/weather", &[("q", query), ("units", "metric")])
            .await?;

        // Re-read the fields the dashboard needs; the full payload still
        // rides along on the card.
        let parsed: OwCurrent = serde_json::from_value(raw.clone())
            .map_err(|source| LookupError::Malformed { endpoint: "current weather", source })?;

        let icon_url = parsed
            .weather
            .first()
            .map(|w| format!("https://openweathermap.org/img/wn/{}@2x.png", w.icon));

        Ok(WeatherCard {
            name: parsed.name,
            icon_url,
            raw,
            fetched_at: Utc::now(),
        })
    }

    /// Resolve a query to coordinates and a canonical name, limit 1.
    async fn geocode(&self, query: &str) -> Result<GeoMatch, LookupError> {
        let matches: Vec<GeoMatch> = self
            .get_json("geocoding", "/geo/1.0/direct", &[("q", query), ("limit", "1")])
            .await?;

        matches
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::CityNotFound(query.to_string()))
    }

    async fn one_call_hours(&self, lat: f64, lon: f64) -> Result<Vec<OneCallHour>, LookupError> {
        let (lat, lon) = (lat.to_string(), lon.to_string());

        let parsed: OwOneCallResponse = self
            .get_json(
                "one-call forecast",
                "/data/2.5/onecall",
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("units", "metric"),
                    ("exclude", "current,minutely,daily,alerts"),
                ],
            )
            .await?;

        Ok(parsed.hourly)
    }

    async fn five_day_slots(&self, lat: f64, lon: f64) -> Result<Vec<ForecastSlot>, LookupError> {
        let (lat, lon) = (lat.to_string(), lon.to_string());

        let parsed: OwForecastResponse = self
            .get_json(
                "5-day forecast",
                "/data/2.5/forecast",
                &[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", "metric")],
            )
            .await?;

        Ok(parsed.list)
    }
}

#[derive(Debug, Deserialize)]
struct OwDescriptor {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    name: String,
    #[serde(default)]
    weather: Vec<OwDescriptor>,
}

#[derive(Debug, Deserialize)]
struct GeoMatch {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwOneCallResponse {
    hourly: Vec<OneCallHour>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<ForecastSlot>,
}

#[async_trait]
impl WeatherBackend for OpenWeatherBackend {
    async fn fetch_current(&self, query: &str) -> Result<WeatherCard, LookupError> {
        self.current_weather(query).await
    }

    async fn fetch_hourly(
        &self,
        query: &str,
        step: ForecastStep,
    ) -> Result<HourlyForecast, LookupError> {
        let place = self.geocode(query).await?;

        let samples = match step {
            ForecastStep::Hourly => {
                forecast::normalize_fine(self.one_call_hours(place.lat, place.lon).await?)
            }
            ForecastStep::ThreeHour => {
                forecast::normalize_coarse(self.five_day_slots(place.lat, place.lon).await?)
            }
        };

        Ok(HourlyForecast { city_name: place.name, samples })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
