//! Keyboard and mouse controls.
//!
//! | Input | Action |
//! |-------|--------|
//! | `A` / wheel up | Scroll forecast left |
//! | `D` / wheel down | Scroll forecast right |
//! | `W` | Temperature +1°F |
//! | `S` | Temperature -1°F |
//! | Mouse move | Pointer glow |
//!
//! Temperature steps replace the whole snapshot, the same way fresh data
//! would arrive.

use embedded_graphics_simulator::sdl2::Keycode;
use log::info;
use weather_common::WeatherView;

/// Forecast scroll per key press or wheel notch, in pixels.
pub const SCROLL_STEP: i32 = 24;

/// Temperature change per key press, in °F.
const TEMPERATURE_STEP: f32 = 1.0;

/// A user action on the view.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Control {
    Scroll(i32),
    Temperature(f32),
}

/// Map a key to its control, if it has one.
pub fn control_for_key(keycode: Keycode) -> Option<Control> {
    match keycode {
        Keycode::A => Some(Control::Scroll(-SCROLL_STEP)),
        Keycode::D => Some(Control::Scroll(SCROLL_STEP)),
        Keycode::W => Some(Control::Temperature(TEMPERATURE_STEP)),
        Keycode::S => Some(Control::Temperature(-TEMPERATURE_STEP)),
        _ => None,
    }
}

/// Map a wheel movement to a scroll. Wheel up moves the strip back.
pub fn control_for_wheel(delta_y: i32) -> Option<Control> {
    (delta_y != 0).then(|| Control::Scroll(-delta_y * SCROLL_STEP))
}

pub fn apply(view: &mut WeatherView, control: Control) {
    match control {
        Control::Scroll(delta) => view.scroll_forecast(delta),
        Control::Temperature(delta) => {
            let snapshot = view.snapshot();
            // Without a reading, step from what it feels like
            let current = snapshot.temperature.unwrap_or(snapshot.feels_like);
            let next = snapshot.with_temperature(Some(current + delta));
            view.replace_snapshot(next);
            info!("temperature {:.0}°F, theme {}", current + delta, view.theme().tier.name());
        }
    }
}
