//! Platform-agnostic core for the weather dashboard.
//!
//! Everything that decides *what* the weather view shows lives here, with no
//! dependency on a window system:
//!
//! - [`snapshot`]: Weather readings and forecast, plus the fixed fallback
//! - [`theme`]: Temperature-to-palette derivation
//! - [`capability`]: Frame-rate probe and device tier classification
//! - [`frames`]: Animation-frame request/cancel registry
//! - [`atmosphere`]: Particle effect gated on the top capability tier
//! - [`view`]: The view state machine tying the above together
//! - [`style`]: Style computation from view state
//! - [`presentation`]: Pure view model (headline, metric cards, forecast)
//! - [`widgets`]: Drawing, generic over `DrawTarget<Color = Rgb565>`
//! - [`animations`]: Theme color fades and the loading pulse
//! - [`render`]: Full-clear tracking between frames
//! - [`colors`], [`config`], [`styles`], [`thresholds`]: Constants
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Time enters only as millisecond
//! timestamps passed in by the caller, so the same code runs under any clock.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod atmosphere;
pub mod capability;
pub mod colors;
pub mod config;
pub mod frames;
pub mod presentation;
pub mod render;
pub mod snapshot;
pub mod style;
pub mod styles;
pub mod theme;
pub mod thresholds;
pub mod view;
pub mod widgets;

// Re-export commonly used items
pub use capability::{CapabilityTier, FrameClock};
pub use snapshot::{ForecastDay, SnapshotError, WeatherSnapshot};
pub use theme::{Theme, ThemeTier, derive_theme};
pub use view::{PointerPosition, ViewPhase, WeatherView};
