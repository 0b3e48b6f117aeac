use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;

use crate::{
    config::Config,
    error::LookupError,
    forecast::ForecastStep,
    model::{HourlyForecast, WeatherCard},
    provider::openweather::OpenWeatherBackend,
};

pub mod openweather;
pub mod translate;

/// The lookup seam the orchestration layer depends on. Production uses the
/// OpenWeather-shaped client; tests substitute canned backends.
#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    /// Current conditions for a free-text query, metric units. The returned
    /// card carries the provider-resolved name, not the query.
    async fn fetch_current(&self, query: &str) -> Result<WeatherCard, LookupError>;

    /// Short-term forecast for a free-text query: geocode to coordinates,
    /// then call the endpoint matching `step` and normalize its items.
    async fn fetch_hourly(
        &self,
        query: &str,
        step: ForecastStep,
    ) -> Result<HourlyForecast, LookupError>;
}

/// Construct the production backend from config.
pub fn backend_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherBackend>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No weather API key configured.\n\
             Hint: run `skycast-web configure` and enter your OpenWeather API key,\n\
             or set SKYCAST_API_KEY."
        )
    })?;

    Ok(Arc::new(OpenWeatherBackend::new(api_key.to_owned())))
}
