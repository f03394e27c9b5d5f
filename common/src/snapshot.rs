//! Weather readings and forecast.
//!
//! A [`WeatherSnapshot`] is an immutable bundle: when new data arrives the view
//! swaps the whole value, it never patches individual fields.
//!
//! # Wire Format
//!
//! Snapshots deserialize from the camelCase JSON the weather front end has
//! always consumed:
//!
//! ```json
//! {
//!   "temperature": 75, "humidity": 50, "windSpeed": 10, "precipitation": 78,
//!   "pressure": 1013, "feelsLike": 80, "windDirection": "N",
//!   "forecast": [{ "day": "Today", "high": 75, "low": 55 }]
//! }
//! ```
//!
//! `temperature` may be absent, which the theme treats as "no reading".
//!
//! # Fixed Capacity
//!
//! Labels and the forecast list use `heapless` containers. Labels longer than
//! their capacity are truncated when built through [`label`]; JSON input that
//! overflows a container fails to deserialize.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::config::MAX_FORECAST_DAYS;
use crate::thresholds::PERCENT_MAX;

/// Capacity of a forecast day label.
pub const DAY_LABEL_LENGTH: usize = 16;

/// Capacity of a compass direction label (`NNE`, `WSW`, ...).
pub const DIRECTION_LENGTH: usize = 4;

/// One day of forecast.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String<DAY_LABEL_LENGTH>,
    pub high: f32,
    pub low: f32,
}

impl ForecastDay {
    /// Build a forecast day, truncating an over-long label.
    pub fn new(day: &str, high: f32, low: f32) -> Self {
        Self {
            day: label(day),
            high,
            low,
        }
    }
}

/// Current readings plus the forecast.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// °F. `None` when the source had no reading.
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Percent, 0-100.
    pub humidity: f32,
    /// mph.
    pub wind_speed: f32,
    /// Percent, 0-100.
    pub precipitation: f32,
    /// mb.
    pub pressure: f32,
    /// °F.
    pub feels_like: f32,
    pub wind_direction: String<DIRECTION_LENGTH>,
    /// Chronological.
    #[serde(default)]
    pub forecast: Vec<ForecastDay, MAX_FORECAST_DAYS>,
}

/// Reasons a snapshot fails [`WeatherSnapshot::validate`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    /// A reading is NaN or infinite.
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    /// A percentage reading is outside 0-100.
    #[error("{field} = {value} is outside 0-100")]
    PercentOutOfRange { field: &'static str, value: f32 },

    /// A forecast day's low is above its high.
    #[error("forecast day {index} has low {low} above high {high}")]
    InvertedForecast { index: usize, low: f32, high: f32 },
}

impl WeatherSnapshot {
    /// The snapshot shown when the caller supplies none.
    pub fn fallback() -> Self {
        let mut forecast = Vec::new();
        for day in [
            ForecastDay::new("Today", 75.0, 55.0),
            ForecastDay::new("Tomorrow", 80.0, 60.0),
            ForecastDay::new("After tomorrow", 85.0, 65.0),
        ] {
            // Three entries always fit
            forecast.push(day).ok();
        }

        Self {
            temperature: Some(75.0),
            humidity: 50.0,
            wind_speed: 10.0,
            precipitation: 78.0,
            pressure: 1013.0,
            feels_like: 80.0,
            wind_direction: label("N"),
            forecast,
        }
    }

    /// A copy of this snapshot with a different temperature reading.
    #[must_use]
    pub fn with_temperature(&self, temperature: Option<f32>) -> Self {
        Self {
            temperature,
            ..self.clone()
        }
    }

    /// Check that every reading is within its documented domain.
    ///
    /// The view itself accepts any snapshot; callers loading external data
    /// use this to reject garbage up front.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if let Some(t) = self.temperature {
            finite("temperature", t)?;
        }
        finite("windSpeed", self.wind_speed)?;
        finite("pressure", self.pressure)?;
        finite("feelsLike", self.feels_like)?;
        percent("humidity", self.humidity)?;
        percent("precipitation", self.precipitation)?;

        for (index, day) in self.forecast.iter().enumerate() {
            finite("forecast.high", day.high)?;
            finite("forecast.low", day.low)?;
            if day.low > day.high {
                return Err(SnapshotError::InvertedForecast {
                    index,
                    low: day.low,
                    high: day.high,
                });
            }
        }
        Ok(())
    }
}

impl Default for WeatherSnapshot {
    fn default() -> Self { Self::fallback() }
}

/// Copy `text` into a fixed-capacity string, dropping whatever does not fit.
pub fn label<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

fn finite(field: &'static str, value: f32) -> Result<(), SnapshotError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SnapshotError::NotFinite { field })
    }
}

fn percent(field: &'static str, value: f32) -> Result<(), SnapshotError> {
    finite(field, value)?;
    if (0.0..=PERCENT_MAX).contains(&value) {
        Ok(())
    } else {
        Err(SnapshotError::PercentOutOfRange { field, value })
    }
}
