//! Pre-computed text styles.
//!
//! Fonts and alignments are `const` so no style object is built per frame.
//! Colors come from the [`ViewStyle`](crate::style::ViewStyle) at draw time,
//! so callers pair a font constant with a color:
//! `MonoTextStyle::new(LABEL_FONT, style.card_text)`.
//!
//! # Glyph Coverage
//!
//! The `ascii` fonts have no `°`. Anything that can contain a degree sign
//! uses the `iso_8859_1` variants. The large headline digits use ProFont and
//! draw the degree sign as a circle.
//!
//! # Widths
//!
//! | Text | Font | Width | Box |
//! |------|------|-------|-----|
//! | `Precipitation` | 5x8 | 65 px | 71 px metric card |
//! | `10 mph NNE` | ProFont 12pt (8 px) | 80 px | clipped to card |
//! | `After tomorrow` | 6x13 bold | 84 px | 92 px forecast card |

use embedded_graphics::{
    mono_font::{
        MonoFont,
        iso_8859_1::{FONT_5X8, FONT_6X13_BOLD, FONT_7X13, FONT_9X15, FONT_10X20},
    },
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered, middle baseline. Card labels and values.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, top baseline. Headline text.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Metric card labels.
pub const LABEL_FONT: &MonoFont = &FONT_5X8;

/// "Feels like" line under the headline.
pub const DETAIL_FONT: &MonoFont = &FONT_7X13;

/// Forecast day names.
pub const DAY_FONT: &MonoFont = &FONT_6X13_BOLD;

/// Forecast high/low range.
pub const RANGE_FONT: &MonoFont = &FONT_9X15;

/// Metric values (ASCII only: `50%`, `10 mph N`, `1013 mb`).
pub const VALUE_FONT: &MonoFont = &PROFONT_12_POINT;

/// Headline temperature digits (ASCII only, degree sign drawn separately).
pub const HEADLINE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Loading overlay caption.
pub const CAPTION_FONT: &MonoFont = &FONT_10X20;
