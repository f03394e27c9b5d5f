//! Render state tracking between frames.
//!
//! Decides per frame whether the display needs drawing at all, and whether it
//! must be fully cleared first:
//!
//! | Trigger | Action |
//! |---------|--------|
//! | First frame | Full clear |
//! | Phase change (overlay → content) | Full clear |
//! | Theme bucket change | Full clear |
//! | Loading overlay | Redraw (pulse animates every frame) |
//! | Particles stepped / colors fading | Redraw |
//! | View revision changed (snapshot, pointer, scroll) | Redraw |
//! | Nothing changed | Skip |
//!
//! **Note:** Color fades are produced by
//! [`ColorTransition`](crate::animations::ColorTransition), not by this module.

use crate::theme::ThemeTier;
use crate::view::{TickOutcome, ViewPhase, WeatherView};

/// What the caller should do with the display this frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameAction {
    /// Nothing visible changed.
    Skip,
    /// Draw over the previous frame.
    Redraw,
    /// Clear the display, then draw.
    FullClear,
}

impl FrameAction {
    /// Whether anything has to be drawn.
    #[inline]
    pub const fn draws(self) -> bool { !matches!(self, Self::Skip) }
}

/// Tracks what was last drawn.
#[derive(Debug)]
pub struct RenderState {
    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    prev_phase: ViewPhase,
    prev_theme: Option<ThemeTier>,
    prev_revision: u32,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            prev_phase: ViewPhase::Loading,
            prev_theme: None,
            prev_revision: 0,
        }
    }

    /// Decide this frame's action from the view and its latest tick.
    pub fn begin_frame(&mut self, view: &WeatherView, outcome: &TickOutcome) -> FrameAction {
        let phase = view.phase();
        let theme = view.theme().tier;

        let full_clear = self.first_frame
            || phase != self.prev_phase
            || self.prev_theme != Some(theme);
        let dirty = view.is_loading() || outcome.needs_redraw() || view.revision() != self.prev_revision;

        self.prev_phase = phase;
        self.prev_theme = Some(theme);
        self.prev_revision = view.revision();

        if full_clear {
            FrameAction::FullClear
        } else if dirty {
            FrameAction::Redraw
        } else {
            FrameAction::Skip
        }
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) { self.first_frame = false; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
