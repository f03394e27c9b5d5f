//! View model: the text the weather view shows.
//!
//! Pure functions from a [`WeatherSnapshot`] to display strings. Layout and
//! color are the widgets' business; this module decides only *what* is said
//! and in which order.
//!
//! | Element | Example |
//! |---------|---------|
//! | Headline | `75°`, `Feels like 80°` |
//! | Metric cards | Humidity `50%`, Wind `10 mph N`, Precipitation `78%`, Pressure `1013 mb` |
//! | Forecast cards | `Today`, `75°/55°` |
//!
//! A missing temperature renders as `--°`. Numbers are rounded half up to whole
//! units, so `72.5` shows as `73` and `-0.4` as `0`.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::{MAX_FORECAST_DAYS, METRIC_COUNT};
use crate::snapshot::{DAY_LABEL_LENGTH, WeatherSnapshot};

/// Capacity of a formatted value.
pub const TEXT_LENGTH: usize = 32;

/// Longest rendering of a whole number (`-2147483648`).
const WHOLE_MAX_CHARS: usize = 11;

// The widest text is a forecast range of two extreme values: `{lo}°/{hi}°`
const _: () = assert!(TEXT_LENGTH >= 2 * (WHOLE_MAX_CHARS + '°'.len_utf8()) + 1);
const _: () = assert!(TEXT_LENGTH >= "Feels like ".len() + WHOLE_MAX_CHARS + '°'.len_utf8());

/// A formatted display string.
pub type Text = String<TEXT_LENGTH>;

/// Headline texts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Headline {
    pub temperature: Text,
    pub feels_like: Text,
}

/// One metric card.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: Text,
}

/// One forecast card.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ForecastCard {
    pub day: String<DAY_LABEL_LENGTH>,
    pub range: Text,
}

/// Round half up to a whole number, saturating at the `i32` range.
///
/// Negative zero cannot survive the conversion, so `-0.4` becomes `0`. NaN
/// maps to `0`.
pub fn whole(value: f32) -> i32 {
    let shifted = value + 0.5;
    let truncated = shifted as i32;
    // `as` truncates toward zero; step down to the floor for negatives
    if (truncated as f32) > shifted { truncated.saturating_sub(1) } else { truncated }
}

pub fn headline(snapshot: &WeatherSnapshot) -> Headline {
    let mut temperature = Text::new();
    match snapshot.temperature {
        Some(t) => {
            let _ = write!(temperature, "{}°", whole(t));
        }
        None => {
            let _ = temperature.push_str("--°");
        }
    }

    let mut feels_like = Text::new();
    let _ = write!(feels_like, "Feels like {}°", whole(snapshot.feels_like));

    Headline {
        temperature,
        feels_like,
    }
}

/// The four metric cards, always in the same order.
pub fn metric_cards(snapshot: &WeatherSnapshot) -> [MetricCard; METRIC_COUNT] {
    let mut humidity = Text::new();
    let _ = write!(humidity, "{}%", whole(snapshot.humidity));

    let mut wind = Text::new();
    let _ = write!(wind, "{} mph {}", whole(snapshot.wind_speed), snapshot.wind_direction);

    let mut precipitation = Text::new();
    let _ = write!(precipitation, "{}%", whole(snapshot.precipitation));

    let mut pressure = Text::new();
    let _ = write!(pressure, "{} mb", whole(snapshot.pressure));

    [
        MetricCard {
            label: "Humidity",
            value: humidity,
        },
        MetricCard {
            label: "Wind",
            value: wind,
        },
        MetricCard {
            label: "Precipitation",
            value: precipitation,
        },
        MetricCard {
            label: "Pressure",
            value: pressure,
        },
    ]
}

/// One card per forecast day, in snapshot order.
pub fn forecast_cards(snapshot: &WeatherSnapshot) -> Vec<ForecastCard, MAX_FORECAST_DAYS> {
    let mut cards = Vec::new();
    for day in &snapshot.forecast {
        let mut range = Text::new();
        let _ = write!(range, "{}°/{}°", whole(day.high), whole(day.low));
        // Same capacity as the snapshot's forecast
        cards
            .push(ForecastCard {
                day: day.day.clone(),
                range,
            })
            .ok();
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ForecastDay;

    #[test]
    fn test_fallback_headline() {
        let h = headline(&WeatherSnapshot::fallback());
        assert_eq!(h.temperature.as_str(), "75°");
        assert_eq!(h.feels_like.as_str(), "Feels like 80°");
    }

    #[test]
    fn test_missing_temperature_headline() {
        let h = headline(&WeatherSnapshot::fallback().with_temperature(None));
        assert_eq!(h.temperature.as_str(), "--°");
    }

    #[test]
    fn test_headline_rounds() {
        let h = headline(&WeatherSnapshot::fallback().with_temperature(Some(71.8)));
        assert_eq!(h.temperature.as_str(), "72°");
    }

    #[test]
    fn test_whole_rounds_half_up() {
        assert_eq!(whole(72.5), 73);
        assert_eq!(whole(73.5), 74);
        assert_eq!(whole(72.49), 72);
        assert_eq!(whole(-0.4), 0, "no negative zero");
        assert_eq!(whole(-0.5), 0);
        assert_eq!(whole(-0.6), -1);
        assert_eq!(whole(-12.5), -12);
        assert_eq!(whole(f32::NAN), 0);
        assert_eq!(whole(1e30), i32::MAX);
        assert_eq!(whole(-1e30), i32::MIN);
    }

    #[test]
    fn test_headline_ties_and_negative_zero() {
        let h = headline(&WeatherSnapshot::fallback().with_temperature(Some(72.5)));
        assert_eq!(h.temperature.as_str(), "73°");
        let h = headline(&WeatherSnapshot::fallback().with_temperature(Some(-0.4)));
        assert_eq!(h.temperature.as_str(), "0°", "a reading just below zero shows as 0°");
    }

    #[test]
    fn test_extreme_values_still_render() {
        let mut s = WeatherSnapshot::fallback().with_temperature(Some(-1e30));
        s.feels_like = -1e30;
        s.forecast[0] = ForecastDay::new("Today", -1e30, -1e30);
        let h = headline(&s);
        assert_eq!(h.temperature.as_str(), "-2147483648°");
        assert_eq!(h.feels_like.as_str(), "Feels like -2147483648°");
        assert_eq!(forecast_cards(&s)[0].range.as_str(), "-2147483648°/-2147483648°");
    }

    #[test]
    fn test_fallback_metric_cards() {
        let cards = metric_cards(&WeatherSnapshot::fallback());
        let rendered: std::vec::Vec<(&str, &str)> = cards.iter().map(|c| (c.label, c.value.as_str())).collect();
        assert_eq!(
            rendered,
            [
                ("Humidity", "50%"),
                ("Wind", "10 mph N"),
                ("Precipitation", "78%"),
                ("Pressure", "1013 mb"),
            ]
        );
    }

    #[test]
    fn test_fallback_forecast_cards() {
        let cards = forecast_cards(&WeatherSnapshot::fallback());
        let rendered: std::vec::Vec<(&str, &str)> = cards.iter().map(|c| (c.day.as_str(), c.range.as_str())).collect();
        assert_eq!(
            rendered,
            [("Today", "75°/55°"), ("Tomorrow", "80°/60°"), ("After tomorrow", "85°/65°")]
        );
    }

    #[test]
    fn test_forecast_keeps_order() {
        let mut s = WeatherSnapshot::fallback();
        s.forecast.clear();
        for (day, high) in [("Sun", 60.0), ("Mon", 90.0), ("Tue", 70.0)] {
            s.forecast.push(ForecastDay::new(day, high, 40.0)).expect("fits");
        }
        let cards = forecast_cards(&s);
        let days: std::vec::Vec<&str> = cards.iter().map(|c| c.day.as_str()).collect();
        assert_eq!(days, ["Sun", "Mon", "Tue"], "cards follow snapshot order, not temperature");
    }

    #[test]
    fn test_empty_forecast() {
        let mut s = WeatherSnapshot::fallback();
        s.forecast.clear();
        assert!(forecast_cards(&s).is_empty());
    }
}
