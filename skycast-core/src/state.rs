//! The bounded, most-recent-first application state.
//!
//! One instance backs the whole dashboard. It is constructed explicitly and
//! injected into [`crate::service::WeatherService`] rather than living in a
//! process-global, so tests (or a future per-session setup) can hold their
//! own copy.

use crate::forecast::ForecastStep;
use crate::model::{HourlyForecast, StateSnapshot, WeatherCard};

pub const CARD_CAPACITY: usize = 3;
pub const HOURLY_CAPACITY: usize = 3;
pub const HISTORY_CAPACITY: usize = 5;

/// Insert at the front; drop the tail element once over capacity.
fn push_front_capped<T>(list: &mut Vec<T>, item: T, capacity: usize) {
    list.insert(0, item);
    if list.len() > capacity {
        list.pop();
    }
}

/// Same, but a no-op when an equal element is already present.
fn push_front_unique_capped(list: &mut Vec<String>, key: String, capacity: usize) {
    if list.iter().any(|existing| *existing == key) {
        return;
    }
    push_front_capped(list, key, capacity);
}

/// Everything the rendered page is built from: weather cards, forecast
/// series, plain-name search history and the forecast granularity flag.
#[derive(Debug, Default)]
pub struct AppState {
    cards: Vec<WeatherCard>,
    hourly: Vec<HourlyForecast>,
    history: Vec<String>,
    step: ForecastStep,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards are never de-duplicated: searching the same city twice shows
    /// two cards.
    pub fn record_card(&mut self, card: WeatherCard) {
        push_front_capped(&mut self.cards, card, CARD_CAPACITY);
    }

    pub fn record_hourly(&mut self, forecast: HourlyForecast) {
        push_front_capped(&mut self.hourly, forecast, HOURLY_CAPACITY);
    }

    /// History is keyed by resolved city name and de-duplicated by exact
    /// match; re-adding a known name changes nothing.
    pub fn record_search(&mut self, name: String) {
        push_front_unique_capped(&mut self.history, name, HISTORY_CAPACITY);
    }

    /// Discard every forecast series and install `forecast` as the only one.
    pub fn replace_hourly(&mut self, forecast: HourlyForecast) {
        self.hourly.clear();
        self.hourly.push(forecast);
    }

    /// Empty cards, forecasts and history. The forecast step survives.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hourly.clear();
        self.history.clear();
    }

    pub fn step(&self) -> ForecastStep {
        self.step
    }

    pub fn set_step(&mut self, step: ForecastStep) {
        self.step = step;
    }

    /// Name of the most recently added card, the "focused" city a step
    /// change refreshes.
    pub fn latest_card_name(&self) -> Option<&str> {
        self.cards.first().map(|card| card.name.as_str())
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            cards: self.cards.clone(),
            hourly_cards: self.hourly.clone(),
            history: self.history.clone(),
            forecast_step: self.step,
        }
    }
}
