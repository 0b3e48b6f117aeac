//! The mutation orchestrator: one method per user action, each applying the
//! lookup results to the shared state under its mutex.
//!
//! Lookups run outside the lock, so two in-flight actions may land their
//! mutations in either order. Each individual mutation is atomic; the
//! arrival order of concurrent actions is not part of the contract.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    error::LookupError,
    forecast::ForecastStep,
    model::StateSnapshot,
    provider::WeatherBackend,
    state::AppState,
};

/// What a new-search action achieved. A failed forecast fetch after a
/// successful current-weather fetch is accepted, not rolled back.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Card, history entry and forecast all recorded.
    Complete,
    /// Card and history entry recorded; the forecast fetch failed.
    CardOnly(LookupError),
}

/// Orchestrates lookups and state mutations for the dashboard.
#[derive(Debug)]
pub struct WeatherService {
    backend: Arc<dyn WeatherBackend>,
    state: Mutex<AppState>,
}

impl WeatherService {
    pub fn new(backend: Arc<dyn WeatherBackend>) -> Self {
        Self { backend, state: Mutex::new(AppState::new()) }
    }

    /// New search: current conditions first, then the forecast. If the
    /// current-weather fetch fails nothing changes; if only the forecast
    /// fetch fails the card and history entry stay.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, LookupError> {
        let card = self.backend.fetch_current(query).await?;
        let resolved = card.name.clone();

        let step = {
            let mut state = self.state.lock();
            state.record_card(card);
            // History is keyed by the provider-resolved name, so "paris"
            // and "Paris" collapse into one entry.
            state.record_search(resolved);
            state.step()
        };

        match self.backend.fetch_hourly(query, step).await {
            Ok(forecast) => {
                self.state.lock().record_hourly(forecast);
                Ok(SearchOutcome::Complete)
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "forecast fetch failed after current succeeded");
                Ok(SearchOutcome::CardOnly(err))
            }
        }
    }

    /// Add a forecast series without touching cards or history.
    pub async fn add_hourly(&self, query: &str) -> Result<(), LookupError> {
        let step = self.state.lock().step();
        let forecast = self.backend.fetch_hourly(query, step).await?;
        self.state.lock().record_hourly(forecast);
        Ok(())
    }

    /// Switch forecast granularity. The step always changes; if a focused
    /// card exists its forecast is re-fetched and becomes the only series.
    /// On a failed re-fetch the previous series are kept.
    pub async fn set_step(&self, step: ForecastStep) -> Result<(), LookupError> {
        let focus = {
            let mut state = self.state.lock();
            state.set_step(step);
            state.latest_card_name().map(str::to_owned)
        };

        let Some(city) = focus else {
            return Ok(());
        };

        let forecast = self.backend.fetch_hourly(&city, step).await?;
        self.state.lock().replace_hourly(forecast);
        Ok(())
    }

    /// Drop cards, forecasts and history. The forecast step survives.
    pub fn clear(&self) {
        self.state.lock().clear();
    }

    /// The full current state, as the rendering layer consumes it.
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.lock().snapshot()
    }
}
