//! Style computation from view state.
//!
//! Drawing code never reads the theme or the capability tier directly. A
//! [`StyleProvider`] turns the current [`WeatherView`] into a flat
//! [`ViewStyle`], and the widgets only consume that.
//!
//! # Text Contrast
//!
//! Text color follows the perceptual luminance (ITU-R BT.601) of whatever it
//! sits on. Theme colors fade between palettes, so the check has to work for
//! any mid-transition color, not just the four palette entries:
//!
//! ```text
//! luma = (77*R + 150*G + 29*B) >> 8    (8-bit channels)
//! luma < 128  → WHITE text
//! luma >= 128 → dark text
//! ```

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    prelude::IntoStorage,
    primitives::Rectangle,
};

use crate::animations::{Pulse, loading_pulse, theme_slot};
use crate::capability::CapabilityTier;
use crate::colors::{CARD_FILL, SIGNATURE_BLUE, TEXT_DARK, WHITE};
use crate::view::WeatherView;

/// Everything the widgets need to draw one frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewStyle {
    /// Screen background (theme primary).
    pub background: Rgb565,
    /// Band behind the forecast strip (theme secondary).
    pub band: Rgb565,
    /// Highlights: card stripes, forecast highs (theme accent).
    pub accent: Rgb565,
    /// Card body.
    pub card_fill: Rgb565,
    /// Text drawn on the background.
    pub headline_text: Rgb565,
    /// Text drawn on cards.
    pub card_text: Rgb565,
    /// Loading overlay, `None` once the view is ready.
    pub overlay: Option<OverlayStyle>,
    /// Center of the pointer glow.
    pub glow_center: Point,
    /// Whether atmosphere particles are drawn.
    pub particles: bool,
}

/// Loading overlay appearance for the current frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OverlayStyle {
    pub background: Rgb565,
    pub pulse: Pulse,
}

/// Computes a [`ViewStyle`] from view state.
pub trait StyleProvider {
    fn style(&self, view: &WeatherView) -> ViewStyle;
}

/// Default styling: theme palette, luminance-based text, signature-blue overlay.
#[derive(Clone, Copy, Default, Debug)]
pub struct ThemeStyles {
    /// Container the pointer glow is positioned in.
    pub bounds: Option<Rectangle>,
}

impl StyleProvider for ThemeStyles {
    fn style(&self, view: &WeatherView) -> ViewStyle {
        let colors = view.theme_colors();
        let background = colors[theme_slot::PRIMARY];
        let bounds = self
            .bounds
            .unwrap_or_else(|| Rectangle::new(Point::zero(), Size::new(view.surface().width, view.surface().height)));

        let overlay = view.is_loading().then(|| OverlayStyle {
            background: SIGNATURE_BLUE,
            pulse: loading_pulse(view.elapsed_ms()),
        });

        ViewStyle {
            background,
            band: colors[theme_slot::SECONDARY],
            accent: colors[theme_slot::ACCENT],
            card_fill: CARD_FILL,
            headline_text: text_color_for_bg(background),
            card_text: text_color_for_bg(CARD_FILL),
            overlay,
            glow_center: view.pointer().to_point(bounds),
            particles: view.tier() == CapabilityTier::Tier1 && view.atmosphere().is_active(),
        }
    }
}

/// Readable text color for a given background.
///
/// Works with any color, including mid-transition colors from
/// [`ColorTransition`](crate::animations::ColorTransition).
pub fn text_color_for_bg(bg_color: Rgb565) -> Rgb565 {
    if luminance(bg_color) < 128 { WHITE } else { TEXT_DARK }
}

/// Perceptual luminance (ITU-R BT.601) of an RGB565 color, 0-255.
pub fn luminance(color: Rgb565) -> u32 {
    let raw = color.into_storage();
    let r5 = u32::from((raw >> 11) & 0x1F);
    let g6 = u32::from((raw >> 5) & 0x3F);
    let b5 = u32::from(raw & 0x1F);

    // 5/6-bit to 8-bit expansion
    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (r8 * 77 + g8 * 150 + b8 * 29) >> 8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, COOL_ACCENT, HOT_PRIMARY, PLEASANT_PRIMARY};
    use crate::snapshot::WeatherSnapshot;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(BLACK), 0);
        assert_eq!(luminance(WHITE), 255);
    }

    #[test]
    fn test_text_on_palette() {
        assert_eq!(text_color_for_bg(HOT_PRIMARY), TEXT_DARK, "pale backgrounds get dark text");
        assert_eq!(text_color_for_bg(PLEASANT_PRIMARY), TEXT_DARK);
        assert_eq!(text_color_for_bg(SIGNATURE_BLUE), WHITE, "signature blue gets white text");
        assert_eq!(text_color_for_bg(COOL_ACCENT), WHITE);
    }

    #[test]
    fn test_loading_style_has_overlay() {
        let view = WeatherView::new(None, None);
        let style = ThemeStyles::default().style(&view);
        let overlay = style.overlay.expect("loading view shows the overlay");
        assert_eq!(overlay.background, SIGNATURE_BLUE);
        assert!(!style.particles);
    }

    #[test]
    fn test_ready_style() {
        let mut view = WeatherView::new(Some(WeatherSnapshot::fallback().with_temperature(Some(82.0))), Some(8.0));
        view.mount();
        let mut now = 0;
        while view.is_loading() && now < 5000 {
            view.tick(now);
            now += 16;
        }

        let style = ThemeStyles::default().style(&view);
        assert!(style.overlay.is_none());
        assert!(style.particles, "tier1 view draws particles");
        assert_eq!(style.background, HOT_PRIMARY);
        assert_eq!(style.glow_center, Point::new(160, 120), "default pointer is the center");
    }

    #[test]
    fn test_glow_follows_bounds() {
        let view = WeatherView::new(None, None);
        let styles = ThemeStyles {
            bounds: Some(Rectangle::new(Point::new(100, 0), Size::new(100, 50))),
        };
        assert_eq!(styles.style(&view).glow_center, Point::new(150, 25));
    }
}
