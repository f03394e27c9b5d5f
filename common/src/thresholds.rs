//! Centralized threshold configuration.
//!
//! All thresholds are compile-time constants with ordering assertions, so a
//! misordered edit fails the build instead of producing an overlapping bucket.
//!
//! # Usage
//!
//! ```ignore
//! use weather_common::thresholds::{TEMP_HOT_MIN, TIER1_MIN_FPS};
//! ```

// =============================================================================
// Temperature Buckets (°F, lower bound inclusive)
// =============================================================================

/// At or above this temperature the view uses the hot palette.
pub const TEMP_HOT_MIN: f32 = 80.0;

/// At or above this temperature (and below hot) the view uses the warm palette.
pub const TEMP_WARM_MIN: f32 = 70.0;

/// At or above this temperature (and below warm) the view uses the pleasant palette.
/// Anything lower is cool.
pub const TEMP_PLEASANT_MIN: f32 = 60.0;

const _: () = assert!(TEMP_PLEASANT_MIN < TEMP_WARM_MIN);
const _: () = assert!(TEMP_WARM_MIN < TEMP_HOT_MIN);

// =============================================================================
// Capability Tiers
// =============================================================================

/// Minimum device memory (GB) for tier 1.
pub const TIER1_MIN_MEMORY_GB: f32 = 4.0;

/// Minimum measured frame rate for tier 1.
pub const TIER1_MIN_FPS: u32 = 50;

/// Minimum device memory (GB) for tier 2.
pub const TIER2_MIN_MEMORY_GB: f32 = 2.0;

/// Minimum measured frame rate for tier 2.
pub const TIER2_MIN_FPS: u32 = 30;

const _: () = assert!(TIER2_MIN_MEMORY_GB < TIER1_MIN_MEMORY_GB);
const _: () = assert!(TIER2_MIN_FPS < TIER1_MIN_FPS);

// =============================================================================
// Snapshot Validation
// =============================================================================

/// Upper bound for percentage readings (humidity, precipitation).
pub const PERCENT_MAX: f32 = 100.0;

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Intentional runtime mirror of the const ordering checks
mod tests {
    use super::*;

    #[test]
    fn test_temperature_threshold_ordering() {
        assert!(TEMP_PLEASANT_MIN < TEMP_WARM_MIN);
        assert!(TEMP_WARM_MIN < TEMP_HOT_MIN);
    }

    #[test]
    fn test_tier_threshold_ordering() {
        assert!(TIER2_MIN_MEMORY_GB < TIER1_MIN_MEMORY_GB);
        assert!(TIER2_MIN_FPS < TIER1_MIN_FPS);
    }

    #[test]
    fn test_tier1_reachable_at_probe_cap() {
        assert!(TIER1_MIN_FPS <= crate::config::MAX_PROBE_FPS);
    }
}
