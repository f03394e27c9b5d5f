//! Layout and timing constants.
//!
//! # Pre-computed Layout
//!
//! Card positions are derived from a handful of base values at compile time so
//! the drawing code never divides per frame:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            HEADLINE  75°                 │  72px
//! │            Feels like 80°                │
//! ├──────────┬──────────┬──────────┬─────────┤
//! │ HUMIDITY │   WIND   │  PRECIP  │ PRESSURE│  56px
//! ├──────────┴──────────┴──────────┴─────────┤
//! │ [Today] [Tomorrow] [After tomorrow] ...  │  80px, scrolls horizontally
//! └──────────────────────────────────────────┘
//! ```

use core::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Outer margin around the card layout.
pub const MARGIN: u32 = 10;

/// Screen center X coordinate, pre-computed as i32 for drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate, pre-computed as i32 for drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Headline
// =============================================================================

/// Top edge of the temperature headline card.
pub const HEADLINE_Y: u32 = 8;

/// Height of the temperature headline card.
pub const HEADLINE_HEIGHT: u32 = 72;

// =============================================================================
// Metric Grid
// =============================================================================

/// Number of metric cards (humidity, wind, precipitation, pressure).
pub const METRIC_COUNT: usize = 4;

/// Top edge of the metric grid.
pub const METRIC_Y: u32 = HEADLINE_Y + HEADLINE_HEIGHT + 8;

/// Height of each metric card.
pub const METRIC_HEIGHT: u32 = 56;

/// Width of each metric card column.
pub const METRIC_WIDTH: u32 = (SCREEN_WIDTH - 2 * MARGIN) / METRIC_COUNT as u32;

// =============================================================================
// Forecast Strip
// =============================================================================

/// Maximum forecast days a snapshot can carry.
pub const MAX_FORECAST_DAYS: usize = 7;

/// Top edge of the forecast strip.
pub const FORECAST_Y: u32 = METRIC_Y + METRIC_HEIGHT + 8;

/// Height of the forecast strip.
pub const FORECAST_HEIGHT: u32 = SCREEN_HEIGHT - FORECAST_Y - 8;

/// Width of one forecast card.
pub const FORECAST_CARD_WIDTH: u32 = 96;

/// Horizontal gap between forecast cards.
pub const FORECAST_GAP: u32 = 8;

/// Visible width of the forecast strip; cards beyond it are reached by scrolling.
pub const FORECAST_VIEW_WIDTH: u32 = SCREEN_WIDTH - 2 * MARGIN;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// How long the capability probe samples frame callbacks.
pub const PROBE_WINDOW_MS: u64 = 1000;

/// Upper bound on the measured frame rate.
pub const MAX_PROBE_FPS: u32 = 60;

/// Device memory assumed when the host reports no hint (GB).
pub const DEFAULT_DEVICE_MEMORY_GB: f32 = 4.0;

/// Period of one loading pulse cycle.
pub const PULSE_PERIOD_MS: u64 = 1500;

// =============================================================================
// Atmosphere Effect
// =============================================================================

/// Number of particles in the atmosphere field.
pub const PARTICLE_COUNT: usize = 40;

/// Seed for the particle field. Fixed so every run looks the same.
pub const PARTICLE_SEED: u64 = 0x5EED_A7B0;

/// Radius of the pointer glow in pixels.
pub const GLOW_RADIUS: u32 = 60;

const _: () = assert!(FORECAST_Y + FORECAST_HEIGHT <= SCREEN_HEIGHT);
const _: () = assert!(FORECAST_CARD_WIDTH <= FORECAST_VIEW_WIDTH);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_grid_fits_screen() {
        assert!(MARGIN + METRIC_WIDTH * METRIC_COUNT as u32 <= SCREEN_WIDTH);
    }

    #[test]
    fn test_sections_do_not_overlap() {
        assert!(HEADLINE_Y + HEADLINE_HEIGHT < METRIC_Y);
        assert!(METRIC_Y + METRIC_HEIGHT < FORECAST_Y);
    }

    #[test]
    fn test_frame_time_allows_top_tier() {
        // A loop that hits its frame budget must be able to measure >= 50 FPS
        let fps = 1000 / FRAME_TIME.as_millis() as u32;
        assert!(fps >= 50, "frame budget of {fps} FPS cannot reach tier 1");
    }
}
