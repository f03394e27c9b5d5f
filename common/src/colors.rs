//! Color constants for the weather view.
//!
//! # Rgb565 from Web Colors
//!
//! The palette was designed as 8-bit-per-channel hex colors. [`rgb888`] packs
//! them into Rgb565 at compile time by dropping the low bits of each channel:
//! - Red: 8 → 5 bits
//! - Green: 8 → 6 bits
//! - Blue: 8 → 5 bits
//!
//! Gradients in the original palette are reduced to their first stop; the
//! secondary slot carries the second stop.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pack an 8-bit-per-channel color into Rgb565 (const, truncating).
#[inline]
pub const fn rgb888(r: u8, g: u8, b: u8) -> Rgb565 { Rgb565::new(r >> 3, g >> 2, b >> 3) }

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0). Text on light backgrounds.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text on dark backgrounds, particles.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Signature Colors
// =============================================================================

/// Signature blue (#2C5282). Headline text and loading overlay background.
pub const SIGNATURE_BLUE: Rgb565 = rgb888(0x2C, 0x52, 0x82);

/// Light signature blue (#4A69BB). Halo behind the loading pulse.
pub const SIGNATURE_BLUE_LIGHT: Rgb565 = rgb888(0x4A, 0x69, 0xBB);

/// Frosted card fill, close to the original's 80% white over the background.
pub const CARD_FILL: Rgb565 = rgb888(0xF7, 0xF9, 0xFC);

/// Soft highlight drawn under the pointer.
pub const GLOW: Rgb565 = rgb888(0xFF, 0xFF, 0xFF);

/// Slate text on light backgrounds (#2D3748).
pub const TEXT_DARK: Rgb565 = rgb888(0x2D, 0x37, 0x48);

// =============================================================================
// Temperature Palette
// =============================================================================

/// Hot tier (≥80°F) primary: warm peach (#FFE4D6).
pub const HOT_PRIMARY: Rgb565 = rgb888(0xFF, 0xE4, 0xD6);
/// Hot tier secondary (#FFD6BA).
pub const HOT_SECONDARY: Rgb565 = rgb888(0xFF, 0xD6, 0xBA);
/// Hot tier accent: orange (#FF8A4C).
pub const HOT_ACCENT: Rgb565 = rgb888(0xFF, 0x8A, 0x4C);

/// Warm tier (70-80°F) primary (#FFE8D6).
pub const WARM_PRIMARY: Rgb565 = rgb888(0xFF, 0xE8, 0xD6);
/// Warm tier secondary (#FFD6C4).
pub const WARM_SECONDARY: Rgb565 = rgb888(0xFF, 0xD6, 0xC4);
/// Warm tier accent: amber (#FFB74D).
pub const WARM_ACCENT: Rgb565 = rgb888(0xFF, 0xB7, 0x4D);

/// Pleasant tier (60-70°F) primary: pale sky (#E6F2FF).
pub const PLEASANT_PRIMARY: Rgb565 = rgb888(0xE6, 0xF2, 0xFF);
/// Pleasant tier secondary (#F0F7FF).
pub const PLEASANT_SECONDARY: Rgb565 = rgb888(0xF0, 0xF7, 0xFF);
/// Pleasant tier accent: clear blue (#4A90E2).
pub const PLEASANT_ACCENT: Rgb565 = rgb888(0x4A, 0x90, 0xE2);

/// Cool tier (<60°F) primary (#E6F4FF).
pub const COOL_PRIMARY: Rgb565 = rgb888(0xE6, 0xF4, 0xFF);
/// Cool tier secondary (#E8F6FF).
pub const COOL_SECONDARY: Rgb565 = rgb888(0xE8, 0xF6, 0xFF);
/// Cool tier accent: deep blue (#2C5282), same as the signature blue.
pub const COOL_ACCENT: Rgb565 = SIGNATURE_BLUE;
