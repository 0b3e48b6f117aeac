//! Normalization of the two upstream forecast shapes.
//!
//! The one-call endpoint returns hourly entries with flat fields; the 5-day
//! endpoint returns 3-hour slots with the quantities nested under `main` and
//! `wind`. Each shape gets its own deserialization type and one mapping into
//! [`HourlySample`], so nothing downstream ever needs to know which endpoint
//! produced a sample.

use serde::{Deserialize, Serialize};

use crate::model::HourlySample;

/// Forecast granularity, selecting both the upstream endpoint and how the
/// resulting series is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStep {
    /// One-hour samples from the one-call endpoint, sliced to the next 24.
    Hourly,
    /// Three-hour samples from the 5-day endpoint, kept whole.
    #[default]
    ThreeHour,
}

impl ForecastStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastStep::Hourly => "hourly",
            ForecastStep::ThreeHour => "three_hour",
        }
    }
}

impl std::fmt::Display for ForecastStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many samples a fine-grained series keeps: 24 hours at 1-hour steps.
pub const FINE_SAMPLE_LIMIT: usize = 24;

/// One hour from the one-call endpoint. All quantities are flat fields.
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallHour {
    pub dt: i64,
    pub temp: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    /// Provider-defined descriptor objects, passed through verbatim.
    #[serde(default)]
    pub weather: serde_json::Value,
}

/// One 3-hour slot from the 5-day endpoint, with nested groupings.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlot {
    pub dt: i64,
    pub main: SlotMain,
    pub wind: SlotWind,
    #[serde(default)]
    pub weather: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotMain {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotWind {
    pub speed: f64,
}

impl From<OneCallHour> for HourlySample {
    fn from(hour: OneCallHour) -> Self {
        HourlySample {
            timestamp: hour.dt,
            temperature: hour.temp,
            humidity: hour.humidity,
            wind_speed: hour.wind_speed,
            weather_condition: hour.weather,
        }
    }
}

impl From<ForecastSlot> for HourlySample {
    fn from(slot: ForecastSlot) -> Self {
        HourlySample {
            timestamp: slot.dt,
            temperature: slot.main.temp,
            humidity: slot.main.humidity,
            wind_speed: slot.wind.speed,
            weather_condition: slot.weather,
        }
    }
}

/// Normalize a fine-grained series, keeping only the next 24 hours.
pub fn normalize_fine(hours: Vec<OneCallHour>) -> Vec<HourlySample> {
    hours.into_iter().take(FINE_SAMPLE_LIMIT).map(Into::into).collect()
}

/// Normalize a coarse series. The 5-day endpoint already bounds its own
/// length, so every slot is kept.
pub fn normalize_coarse(slots: Vec<ForecastSlot>) -> Vec<HourlySample> {
    slots.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat_hour(dt: i64) -> OneCallHour {
        OneCallHour {
            dt,
            temp: 21.4,
            humidity: 63,
            wind_speed: 4.2,
            weather: json!([{ "id": 800, "description": "clear sky", "icon": "01d" }]),
        }
    }

    #[test]
    fn flat_and_nested_shapes_normalize_identically() {
        let descriptor = json!([{ "id": 800, "description": "clear sky", "icon": "01d" }]);

        let from_flat: HourlySample = OneCallHour {
            dt: 1_700_000_000,
            temp: 21.4,
            humidity: 63,
            wind_speed: 4.2,
            weather: descriptor.clone(),
        }
        .into();

        let from_nested: HourlySample = ForecastSlot {
            dt: 1_700_000_000,
            main: SlotMain { temp: 21.4, humidity: 63 },
            wind: SlotWind { speed: 4.2 },
            weather: descriptor,
        }
        .into();

        assert_eq!(from_flat, from_nested);
    }

    #[test]
    fn fine_series_is_sliced_to_24_samples() {
        let hours: Vec<OneCallHour> = (0..48).map(|i| flat_hour(1_700_000_000 + i * 3600)).collect();
        let samples = normalize_fine(hours);

        assert_eq!(samples.len(), FINE_SAMPLE_LIMIT);
        // The slice keeps the earliest samples, in upstream order.
        assert_eq!(samples[0].timestamp, 1_700_000_000);
        assert_eq!(samples[23].timestamp, 1_700_000_000 + 23 * 3600);
    }

    #[test]
    fn fine_series_shorter_than_limit_is_kept_whole() {
        let hours: Vec<OneCallHour> = (0..5).map(|i| flat_hour(i)).collect();
        assert_eq!(normalize_fine(hours).len(), 5);
    }

    #[test]
    fn coarse_series_is_never_truncated() {
        let slots: Vec<ForecastSlot> = (0..40)
            .map(|i| ForecastSlot {
                dt: i64::from(i) * 10_800,
                main: SlotMain { temp: 10.0, humidity: 50 },
                wind: SlotWind { speed: 3.0 },
                weather: serde_json::Value::Null,
            })
            .collect();

        // 5 days of 3-hour slots.
        assert_eq!(normalize_coarse(slots).len(), 40);
    }

    #[test]
    fn descriptor_passes_through_verbatim() {
        let descriptor = json!([{ "id": 500, "main": "Rain", "icon": "10n", "extra": [1, 2] }]);
        let sample: HourlySample = ForecastSlot {
            dt: 0,
            main: SlotMain { temp: 8.0, humidity: 91 },
            wind: SlotWind { speed: 7.7 },
            weather: descriptor.clone(),
        }
        .into();

        assert_eq!(sample.weather_condition, descriptor);
    }

    #[test]
    fn slot_missing_a_quantity_fails_to_deserialize() {
        // No `wind` grouping at all: the whole item is rejected instead of
        // producing a sample with a hole in it.
        let item = json!({
            "dt": 1_700_000_000,
            "main": { "temp": 12.0, "humidity": 70 },
            "weather": []
        });

        assert!(serde_json::from_value::<ForecastSlot>(item).is_err());
    }

    #[test]
    fn hour_missing_wind_speed_fails_to_deserialize() {
        let item = json!({
            "dt": 1_700_000_000,
            "temp": 12.0,
            "humidity": 70,
            "weather": []
        });

        assert!(serde_json::from_value::<OneCallHour>(item).is_err());
    }

    #[test]
    fn step_roundtrips_through_its_wire_name() {
        for step in [ForecastStep::Hourly, ForecastStep::ThreeHour] {
            let s = serde_json::to_string(&step).expect("serialize");
            let parsed: ForecastStep = serde_json::from_str(&s).expect("parse");
            assert_eq!(step, parsed);
        }
        assert_eq!(ForecastStep::Hourly.as_str(), "hourly");
        assert_eq!(ForecastStep::ThreeHour.as_str(), "three_hour");
    }
}
