//! Forecast strip: one card per day, scrolled horizontally.
//!
//! The strip sits on a band in the theme's secondary color. Cards are laid
//! out left to right in snapshot order and shifted left by the view's scroll
//! offset. Anything outside the strip is clipped.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use super::primitives::draw_card;
use crate::config::{
    FORECAST_CARD_WIDTH, FORECAST_GAP, FORECAST_HEIGHT, FORECAST_VIEW_WIDTH, FORECAST_Y, MARGIN, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::presentation::ForecastCard;
use crate::style::ViewStyle;
use crate::styles::{CENTERED, DAY_FONT, RANGE_FONT};

/// Visible strip.
pub const STRIP_AREA: Rectangle = Rectangle::new(
    Point::new(MARGIN as i32, FORECAST_Y as i32),
    Size::new(FORECAST_VIEW_WIDTH, FORECAST_HEIGHT),
);

/// Band behind the strip, full width down to the bottom edge.
const BAND_AREA: Rectangle = Rectangle::new(
    Point::new(0, FORECAST_Y as i32 - 4),
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - FORECAST_Y + 4),
);

/// Day label center, relative to the card's top-left.
const DAY_OFFSET: Point = Point::new(FORECAST_CARD_WIDTH as i32 / 2, 24);

/// Range center, relative to the card's top-left.
const RANGE_OFFSET: Point = Point::new(FORECAST_CARD_WIDTH as i32 / 2, 52);

/// Unscrolled screen area of forecast card `index`.
pub const fn forecast_card_area(index: usize) -> Rectangle {
    Rectangle::new(
        Point::new(
            (MARGIN + index as u32 * (FORECAST_CARD_WIDTH + FORECAST_GAP)) as i32,
            FORECAST_Y as i32,
        ),
        Size::new(FORECAST_CARD_WIDTH, FORECAST_HEIGHT),
    )
}

pub fn draw_forecast_strip<D>(display: &mut D, cards: &[ForecastCard], scroll: u32, style: &ViewStyle)
where
    D: DrawTarget<Color = Rgb565>,
{
    BAND_AREA
        .into_styled(PrimitiveStyle::with_fill(style.band))
        .draw(display)
        .ok();

    let day_style = MonoTextStyle::new(DAY_FONT, style.card_text);
    let range_style = MonoTextStyle::new(RANGE_FONT, style.card_text);
    let shift = Point::new(-(scroll as i32), 0);

    let mut strip = display.clipped(&STRIP_AREA);
    for (index, card) in cards.iter().enumerate() {
        let area = forecast_card_area(index).translate(shift);
        if area.intersection(&STRIP_AREA).is_zero_sized() {
            continue;
        }
        draw_card(&mut strip, area, style.card_fill, style.accent);
        Text::with_text_style(&card.day, area.top_left + DAY_OFFSET, day_style, CENTERED)
            .draw(&mut strip)
            .ok();
        Text::with_text_style(&card.range, area.top_left + RANGE_OFFSET, range_style, CENTERED)
            .draw(&mut strip)
            .ok();
    }
}
