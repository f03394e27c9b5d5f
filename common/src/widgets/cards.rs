//! Metric card grid.
//!
//! Four equal columns under the headline, always in the order Humidity,
//! Wind, Precipitation, Pressure:
//!
//! ```text
//! ┌────────┬────────┬────────┬────────┐
//! │Humidity│  Wind  │ Precip │Pressure│  5x8 label
//! │  50%   │10 mph N│  78%   │1013 mb │  ProFont 12pt value
//! └────────┴────────┴────────┴────────┘
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use super::primitives::draw_card;
use crate::config::{MARGIN, METRIC_COUNT, METRIC_HEIGHT, METRIC_WIDTH, METRIC_Y};
use crate::presentation::MetricCard;
use crate::style::ViewStyle;
use crate::styles::{CENTERED, LABEL_FONT, VALUE_FONT};

/// Label center, relative to the card's top-left.
const LABEL_OFFSET: Point = Point::new(METRIC_WIDTH as i32 / 2, 16);

/// Value center, relative to the card's top-left.
const VALUE_OFFSET: Point = Point::new(METRIC_WIDTH as i32 / 2, 36);

/// Screen area of metric card `index`.
pub const fn metric_card_area(index: usize) -> Rectangle {
    Rectangle::new(
        Point::new((MARGIN + index as u32 * METRIC_WIDTH) as i32, METRIC_Y as i32),
        Size::new(METRIC_WIDTH, METRIC_HEIGHT),
    )
}

pub fn draw_metric_cards<D>(display: &mut D, cards: &[MetricCard; METRIC_COUNT], style: &ViewStyle)
where
    D: DrawTarget<Color = Rgb565>,
{
    let label_style = MonoTextStyle::new(LABEL_FONT, style.card_text);
    let value_style = MonoTextStyle::new(VALUE_FONT, style.card_text);

    for (index, card) in cards.iter().enumerate() {
        let area = metric_card_area(index);
        draw_card(display, area, style.card_fill, style.accent);

        // Long wind values must not spill into the neighbouring card
        let mut clipped = display.clipped(&area);
        Text::with_text_style(card.label, area.top_left + LABEL_OFFSET, label_style, CENTERED)
            .draw(&mut clipped)
            .ok();
        Text::with_text_style(&card.value, area.top_left + VALUE_OFFSET, value_style, CENTERED)
            .draw(&mut clipped)
            .ok();
    }
}
