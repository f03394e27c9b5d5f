//! Headline: current temperature and "feels like".
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ ▌ 75 o                       │  ProFont 24pt digits + drawn degree sign
//! │ ▌ Feels like 80°             │  7x13
//! └──────────────────────────────┘
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use super::primitives::draw_degree;
use crate::config::{HEADLINE_HEIGHT, HEADLINE_Y, MARGIN};
use crate::presentation::Headline;
use crate::style::ViewStyle;
use crate::styles::{DETAIL_FONT, HEADLINE_FONT, TOP_LEFT};

/// Accent bar on the left edge of the headline.
const BAR_POS: Point = Point::new(MARGIN as i32, HEADLINE_Y as i32 + 6);
const BAR_SIZE: Size = Size::new(4, HEADLINE_HEIGHT - 12);

/// Top-left of the temperature digits.
const TEMP_POS: Point = Point::new(MARGIN as i32 + 12, HEADLINE_Y as i32 + 6);

/// Top-left of the "feels like" line.
const DETAIL_POS: Point = Point::new(MARGIN as i32 + 12, HEADLINE_Y as i32 + 44);

/// Degree sign diameter next to the large digits.
const DEGREE_DIAMETER: u32 = 8;

pub fn draw_headline<D>(display: &mut D, headline: &Headline, style: &ViewStyle)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BAR_POS, BAR_SIZE)
        .into_styled(PrimitiveStyle::with_fill(style.accent))
        .draw(display)
        .ok();

    // ProFont has no degree glyph: draw the digits, then a ring
    let digits = headline.temperature.trim_end_matches('°');
    let temp_style = MonoTextStyle::new(HEADLINE_FONT, style.headline_text);
    let end = Text::with_text_style(digits, TEMP_POS, temp_style, TOP_LEFT)
        .draw(display)
        .unwrap_or(TEMP_POS);
    if digits.len() != headline.temperature.len() {
        draw_degree(display, end + Point::new(2, 4), DEGREE_DIAMETER, style.headline_text);
    }

    let detail_style = MonoTextStyle::new(DETAIL_FONT, style.headline_text);
    Text::with_text_style(&headline.feels_like, DETAIL_POS, detail_style, TOP_LEFT)
        .draw(display)
        .ok();
}
