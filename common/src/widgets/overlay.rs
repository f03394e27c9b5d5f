//! Loading overlay shown while the capability probe runs.
//!
//! # Visual Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │                                    │
//! │               ████                 │  Pulsing disc
//! │              ██████                │  (scale 0.95-1.05,
//! │               ████                 │   opacity 0.5-0.8)
//! │                                    │
//! │          Loading weather           │  Caption
//! └────────────────────────────────────┘
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::Text;

use crate::animations::blend_rgb565;
use crate::colors::{SIGNATURE_BLUE_LIGHT, WHITE};
use crate::config::{CENTER_X, CENTER_Y};
use crate::style::{OverlayStyle, text_color_for_bg};
use crate::styles::{CAPTION_FONT, CENTERED};

/// Disc diameter at scale 1.0.
const DISC_DIAMETER: u32 = 48;

/// Fixed halo around the disc, just larger than its largest pulse.
const HALO_DIAMETER: u32 = 60;

/// Disc center, slightly above the screen center to leave room for the caption.
const DISC_CENTER: Point = Point::new(CENTER_X, CENTER_Y - 16);

/// Caption position (centered).
const CAPTION_POS: Point = Point::new(CENTER_X, CENTER_Y + 36);

/// Draw the full-screen loading overlay.
pub fn draw_loading_overlay<D>(display: &mut D, overlay: &OverlayStyle)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(overlay.background).ok();

    Circle::with_center(DISC_CENTER, HALO_DIAMETER)
        .into_styled(PrimitiveStyle::with_stroke(SIGNATURE_BLUE_LIGHT, 2))
        .draw(display)
        .ok();

    let diameter = (DISC_DIAMETER as f32 * overlay.pulse.scale) as u32;
    let disc = blend_rgb565(overlay.background, WHITE, overlay.pulse.opacity);
    Circle::with_center(DISC_CENTER, diameter)
        .into_styled(PrimitiveStyle::with_fill(disc))
        .draw(display)
        .ok();

    let caption = MonoTextStyle::new(CAPTION_FONT, text_color_for_bg(overlay.background));
    Text::with_text_style("Loading weather", CAPTION_POS, caption, CENTERED)
        .draw(display)
        .ok();
}
