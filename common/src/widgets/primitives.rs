//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

use crate::animations::blend_rgb565;
use crate::colors::GLOW;

/// Height of the accent stripe along a card's top edge.
const STRIPE_HEIGHT: u32 = 3;

/// Glow rings from outside in: (diameter fraction in eighths, alpha).
const GLOW_RINGS: [(u32, f32); 3] = [(8, 0.10), (5, 0.20), (3, 0.30)];

/// Draw a card: fill inset by 2px, with an accent stripe along the top.
pub fn draw_card<D>(
    display: &mut D,
    area: Rectangle,
    fill: Rgb565,
    accent: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Size { width, height } = area.size;
    if width < 4 || height < 4 + STRIPE_HEIGHT {
        return;
    }
    let inner = Rectangle::new(area.top_left + Point::new(2, 2), Size::new(width - 4, height - 4));
    inner.into_styled(PrimitiveStyle::with_fill(fill)).draw(display).ok();
    Rectangle::new(inner.top_left, Size::new(inner.size.width, STRIPE_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(accent))
        .draw(display)
        .ok();
}

/// Draw a degree sign with its top-left at `top_left`.
pub fn draw_degree<D>(
    display: &mut D,
    top_left: Point,
    diameter: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::new(top_left, diameter)
        .into_styled(PrimitiveStyle::with_stroke(color, 2))
        .draw(display)
        .ok();
}

/// Draw a soft radial highlight centered on `center`.
///
/// Approximated by concentric discs, each blended a little more toward white.
pub fn draw_glow<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (eighths, alpha) in GLOW_RINGS {
        let diameter = radius * 2 * eighths / 8;
        if diameter == 0 {
            continue;
        }
        Circle::with_center(center, diameter)
            .into_styled(PrimitiveStyle::with_fill(blend_rgb565(background, GLOW, alpha)))
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{BLACK, CARD_FILL, HOT_ACCENT};

    fn display() -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(Size::new(64, 64));
        display.clear(BLACK).ok();
        display
    }

    #[test]
    fn test_card_layers() {
        let mut d = display();
        draw_card(&mut d, Rectangle::new(Point::new(0, 0), Size::new(40, 30)), CARD_FILL, HOT_ACCENT);
        assert_eq!(d.get_pixel(Point::new(1, 10)), BLACK, "2px inset stays untouched");
        assert_eq!(d.get_pixel(Point::new(10, 2)), HOT_ACCENT, "stripe on top");
        assert_eq!(d.get_pixel(Point::new(10, 20)), CARD_FILL);
    }

    #[test]
    fn test_card_too_small() {
        let mut d = display();
        draw_card(&mut d, Rectangle::new(Point::zero(), Size::new(3, 3)), CARD_FILL, HOT_ACCENT);
        assert_eq!(d.get_pixel(Point::new(1, 1)), BLACK);
    }

    #[test]
    fn test_glow_brightens_center() {
        let mut d = display();
        draw_glow(&mut d, Point::new(32, 32), 20, BLACK);
        assert_ne!(d.get_pixel(Point::new(32, 32)), BLACK, "center is lit");
        assert_eq!(d.get_pixel(Point::new(0, 0)), BLACK, "outside the radius stays dark");
    }
}
