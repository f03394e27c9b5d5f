//! Atmosphere particles.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::animations::blend_rgb565;
use crate::atmosphere::Particle;
use crate::colors::WHITE;

/// Particle edge length in pixels.
const PARTICLE_SIZE: Size = Size::new(2, 2);

/// Draw each particle as a small square blended over `background`.
pub fn draw_particles<D>(display: &mut D, particles: &[Particle], background: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    for p in particles {
        let color = blend_rgb565(background, WHITE, p.opacity);
        Rectangle::new(Point::new(p.x as i32, p.y as i32), PARTICLE_SIZE)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}
