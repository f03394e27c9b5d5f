//! Widget components for the weather view.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.
//! [`draw_view`] composes them into one frame; drawing only reads the view.
//!
//! # Frame Layout (ready)
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │ ▌ 75°                              │  Headline
//! │ ▌ Feels like 80°                   │
//! ├────────┬────────┬────────┬─────────┤
//! │Humidity│  Wind  │ Precip │Pressure │  Metric cards
//! ├────────┴────────┴────────┴─────────┤
//! │ [Today ] [Tomorrow] [After tom..]  │  Forecast strip (scrolls)
//! └────────────────────────────────────┘
//! ```
//!
//! The pointer glow and, on tier1 devices, the atmosphere particles sit on the
//! background beneath the content.

mod cards;
mod forecast;
mod headline;
mod overlay;
mod particles;
mod primitives;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

pub use cards::{draw_metric_cards, metric_card_area};
pub use forecast::{STRIP_AREA, draw_forecast_strip, forecast_card_area};
pub use headline::draw_headline;
pub use overlay::draw_loading_overlay;
pub use particles::draw_particles;
pub use primitives::{draw_card, draw_degree, draw_glow};

use crate::config::GLOW_RADIUS;
use crate::presentation::{forecast_cards, headline, metric_cards};
use crate::style::ViewStyle;
use crate::view::WeatherView;

/// Draw one complete frame of `view`.
pub fn draw_view<D>(display: &mut D, view: &WeatherView, style: &ViewStyle)
where
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(overlay) = &style.overlay {
        draw_loading_overlay(display, overlay);
        return;
    }

    let snapshot = view.snapshot();
    display.clear(style.background).ok();
    draw_glow(display, style.glow_center, GLOW_RADIUS, style.background);
    if style.particles {
        draw_particles(display, view.atmosphere().particles(), style.background);
    }
    draw_headline(display, &headline(snapshot), style);
    draw_metric_cards(display, &metric_cards(snapshot), style);
    draw_forecast_strip(display, &forecast_cards(snapshot), view.forecast_scroll(), style);
}
