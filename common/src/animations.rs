//! Animation effects for the weather view.
//!
//! This module provides:
//! - **Theme color transitions**: Smooth fades when the theme bucket changes
//! - **Loading pulse**: The breathing disc on the loading overlay
//!
//! # Color Transitions
//!
//! Theme derivation is a hard step function. To avoid the whole screen
//! snapping between palettes, each theme slot (primary, secondary, accent)
//! interpolates toward its new color over several frames:
//! 1. Track the target color for each slot
//! 2. Interpolate the current color toward the target each frame
//! 3. Lerp in RGB565 space with fixed-point math
//!
//! At 0.15 per frame and ~60 FPS a full change settles in about 0.3-0.5 s.
//!
//! # Loading Pulse
//!
//! ```text
//! scale   = 1.00 - 0.05 * cos(2π * phase)    0.95 → 1.05 → 0.95
//! opacity = 0.65 - 0.15 * cos(2π * phase)    0.50 → 0.80 → 0.50
//! ```
//!
//! with `phase = (elapsed % PULSE_PERIOD_MS) / PULSE_PERIOD_MS`.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::config::PULSE_PERIOD_MS;

// =============================================================================
// Theme Slots
// =============================================================================

/// Number of animated theme slots.
pub const THEME_SLOTS: usize = 3;

/// Slot indices, matching [`Theme::colors`](crate::theme::Theme::colors) order.
pub mod theme_slot {
    pub const PRIMARY: usize = 0;
    pub const SECONDARY: usize = 1;
    pub const ACCENT: usize = 2;
}

// =============================================================================
// Color Transition Constants
// =============================================================================

/// Speed of color interpolation (0.0-1.0).
/// Higher values = faster transitions, 1.0 = instant.
const COLOR_LERP_SPEED: f32 = 0.15;

/// Threshold for considering colors "close enough" to snap to target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

// =============================================================================
// Color Transition State
// =============================================================================

/// Tracks color transitions for the theme slots.
#[derive(Clone, Debug)]
pub struct ColorTransition {
    /// Current interpolated colors (what's actually displayed).
    current_colors: [Rgb565; THEME_SLOTS],

    /// Target colors (what we're transitioning toward).
    target_colors: [Rgb565; THEME_SLOTS],

    /// Whether each slot is currently transitioning.
    transitioning: [bool; THEME_SLOTS],
}

impl ColorTransition {
    /// Start settled on `initial`.
    pub const fn new(initial: [Rgb565; THEME_SLOTS]) -> Self {
        Self {
            current_colors: initial,
            target_colors: initial,
            transitioning: [false; THEME_SLOTS],
        }
    }

    /// Set target color for a slot and start a transition if different.
    ///
    /// Returns `true` if a new transition was started.
    pub fn set_target(&mut self, slot: usize, target: Rgb565) -> bool {
        if self.target_colors[slot] == target {
            false
        } else {
            self.target_colors[slot] = target;
            self.transitioning[slot] = true;
            true
        }
    }

    /// Set all slot targets at once. Returns `true` if any slot changed target.
    pub fn set_targets(&mut self, targets: [Rgb565; THEME_SLOTS]) -> bool {
        let mut started = false;
        for (slot, target) in targets.into_iter().enumerate() {
            started |= self.set_target(slot, target);
        }
        started
    }

    /// Get current (interpolated) color for a slot.
    #[inline]
    pub const fn get_current(&self, slot: usize) -> Rgb565 { self.current_colors[slot] }

    /// Whether any slot is still moving.
    pub fn is_settled(&self) -> bool { self.transitioning.iter().all(|t| !t) }

    /// Advance all transitions by one frame.
    ///
    /// Returns a bitmask of which slots changed color this frame.
    pub fn update(&mut self) -> u8 {
        let mut changed: u8 = 0;

        for i in 0..THEME_SLOTS {
            if !self.transitioning[i] {
                continue;
            }
            let current = self.current_colors[i];
            let target = self.target_colors[i];

            if current == target {
                self.transitioning[i] = false;
                continue;
            }

            let new_color = lerp_rgb565(current, target, COLOR_LERP_SPEED);

            if colors_close_enough(new_color, target) {
                self.current_colors[i] = target;
                self.transitioning[i] = false;
            } else {
                self.current_colors[i] = new_color;
            }

            changed |= 1 << i;
        }

        changed
    }
}

// =============================================================================
// Loading Pulse
// =============================================================================

/// One frame of the loading pulse.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pulse {
    /// Size multiplier, 0.95-1.05.
    pub scale: f32,
    /// Opacity, 0.5-0.8.
    pub opacity: f32,
}

/// Pulse state `elapsed_ms` into the loading animation.
pub fn loading_pulse(elapsed_ms: u64) -> Pulse {
    let phase = (elapsed_ms % PULSE_PERIOD_MS) as f32 / PULSE_PERIOD_MS as f32;
    let c = micromath::F32(phase * core::f32::consts::TAU).cos().0;
    Pulse {
        scale: 1.0 - 0.05 * c,
        opacity: 0.65 - 0.15 * c,
    }
}

// =============================================================================
// Color Helpers
// =============================================================================

fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

/// Linear interpolation between two Rgb565 colors.
///
/// Uses 8-bit fixed-point. When the computed step truncates to zero the step
/// is forced to ±1, so every call either moves closer or the colors are equal.
pub fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let (from_r, from_g, from_b) = channels(from);
    let (to_r, to_g, to_b) = channels(to);

    let t_fixed = (t * 256.0) as i32;

    let compute_step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            let step = (delta * t_fixed) >> 8;
            if step == 0 {
                if delta > 0 { 1 } else { -1 }
            } else {
                step
            }
        }
    };

    let r = (from_r + compute_step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + compute_step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + compute_step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Blend `fg` over `bg` with `alpha` in 0.0-1.0.
pub fn blend_rgb565(bg: Rgb565, fg: Rgb565, alpha: f32) -> Rgb565 {
    let a = (alpha.clamp(0.0, 1.0) * 256.0) as i32;
    let (bg_r, bg_g, bg_b) = channels(bg);
    let (fg_r, fg_g, fg_b) = channels(fg);
    let mix = |b: i32, f: i32| b + (((f - b) * a) >> 8);
    Rgb565::new(
        mix(bg_r, fg_r).clamp(0, 31) as u8,
        mix(bg_g, fg_g).clamp(0, 63) as u8,
        mix(bg_b, fg_b).clamp(0, 31) as u8,
    )
}

/// Manhattan distance in RGB565 space within the snap threshold.
fn colors_close_enough(a: Rgb565, b: Rgb565) -> bool {
    let (a_r, a_g, a_b) = channels(a);
    let (b_r, b_g, b_b) = channels(b);
    let diff = (a_r - b_r).abs() + (a_g - b_g).abs() + (a_b - b_b).abs();
    diff <= COLOR_SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================
