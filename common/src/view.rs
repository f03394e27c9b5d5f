//! Weather view state machine.
//!
//! [`WeatherView`] owns everything the screen shows and everything that
//! changes it over time:
//!
//! ```text
//!            mount()                    probe resolves (same tick)
//!  created ──────────► Loading ─────────────────────────────────────► Ready
//!                      tier = Determining                 tier = Tier1/2/3
//!                      is_loading = true                  is_loading = false
//! ```
//!
//! # Frame Callbacks
//!
//! Two components ride on the [`FrameScheduler`]: the capability prober, which
//! re-requests a frame until its sampling window has elapsed, and the
//! atmosphere effect, which re-requests a frame for as long as it is active.
//! [`WeatherView::tick`] drains due requests once per frame.
//!
//! # Theme
//!
//! The theme is derived from the snapshot temperature on creation and on every
//! [`WeatherView::replace_snapshot`] that changes the temperature. The derived
//! palette is then faded in by a [`ColorTransition`] rather than applied in a
//! single frame.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    primitives::Rectangle,
};
use log::{debug, info};

use crate::animations::{ColorTransition, THEME_SLOTS};
use crate::atmosphere::AtmosphereEffect;
use crate::capability::{CapabilityProber, CapabilityTier};
use crate::config::{FORECAST_CARD_WIDTH, FORECAST_GAP, FORECAST_VIEW_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::frames::{FrameCallback, FrameRequest, FrameScheduler};
use crate::snapshot::WeatherSnapshot;
use crate::theme::{Theme, derive_theme};

// =============================================================================
// View Types
// =============================================================================

/// Lifecycle phase of the view.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ViewPhase {
    /// Capability probe in flight; the loading overlay is shown.
    #[default]
    Loading,
    /// Tier known; the weather content is shown.
    Ready,
}

/// Pointer position as a percentage (0-100) of the container.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerPosition {
    fn default() -> Self { Self { x: 50.0, y: 50.0 } }
}

impl PointerPosition {
    /// Map a percentage position back onto `bounds`.
    pub fn to_point(self, bounds: Rectangle) -> Point {
        let w = bounds.size.width as f32;
        let h = bounds.size.height as f32;
        bounds.top_left + Point::new((self.x * w / 100.0) as i32, (self.y * h / 100.0) as i32)
    }
}

/// What a single [`WeatherView::tick`] did.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct TickOutcome {
    /// The capability probe sampled a frame.
    pub probed: bool,
    /// The atmosphere effect advanced its particles.
    pub atmosphere_stepped: bool,
    /// The view left `Loading` during this tick.
    pub became_ready: bool,
    /// Bitmask of theme slots whose displayed color changed.
    pub colors_changed: u8,
}

impl TickOutcome {
    /// Whether anything visible changed.
    pub const fn needs_redraw(&self) -> bool {
        self.atmosphere_stepped || self.became_ready || self.colors_changed != 0
    }
}

/// Largest horizontal scroll for a forecast strip of `days` cards.
pub const fn forecast_max_scroll(days: usize) -> u32 {
    if days == 0 {
        return 0;
    }
    let content = days as u32 * FORECAST_CARD_WIDTH + (days as u32 - 1) * FORECAST_GAP;
    content.saturating_sub(FORECAST_VIEW_WIDTH)
}

// =============================================================================
// Weather View
// =============================================================================

/// The weather view and its time-dependent state.
#[derive(Debug)]
pub struct WeatherView {
    snapshot: WeatherSnapshot,
    theme: Theme,
    tier: CapabilityTier,
    phase: ViewPhase,
    pointer: PointerPosition,

    prober: CapabilityProber,
    probe_request: Option<FrameRequest>,
    scheduler: FrameScheduler,
    atmosphere: AtmosphereEffect,
    colors: ColorTransition,

    forecast_scroll: u32,
    surface: Size,
    revision: u32,
    mounted: bool,
    torn_down: bool,
    first_tick_ms: Option<u64>,
    last_tick_ms: u64,
}

impl WeatherView {
    /// Create a view in `Loading`. `None` shows the fallback snapshot.
    pub fn new(initial: Option<WeatherSnapshot>, memory_hint_gb: Option<f32>) -> Self {
        let snapshot = initial.unwrap_or_else(WeatherSnapshot::fallback);
        let theme = derive_theme(snapshot.temperature, Theme::default());
        info!("weather view created: theme {}", theme.tier.name());

        Self {
            snapshot,
            theme,
            tier: CapabilityTier::Determining,
            phase: ViewPhase::Loading,
            pointer: PointerPosition::default(),
            prober: CapabilityProber::new(memory_hint_gb),
            probe_request: None,
            scheduler: FrameScheduler::new(),
            atmosphere: AtmosphereEffect::new(),
            colors: ColorTransition::new(theme.colors()),
            forecast_scroll: 0,
            surface: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            revision: 0,
            mounted: false,
            torn_down: false,
            first_tick_ms: None,
            last_tick_ms: 0,
        }
    }

    /// Use a drawing surface other than the full screen for the atmosphere.
    #[must_use]
    pub fn with_surface(mut self, surface: Size) -> Self {
        self.surface = surface;
        self
    }

    /// Start the capability probe. Repeated calls are ignored.
    ///
    /// The probe runs even when a snapshot was supplied up front.
    pub fn mount(&mut self) {
        if self.mounted || self.torn_down {
            return;
        }
        self.mounted = true;
        self.probe_request = Some(self.scheduler.request(FrameCallback::CapabilityProbe));
        debug!("weather view mounted, probing capability");
    }

    /// Run one frame: fire due callbacks and advance the theme fade.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.torn_down {
            return outcome;
        }

        self.first_tick_ms.get_or_insert(now_ms);
        self.last_tick_ms = now_ms;

        for (request, callback) in self.scheduler.take_due() {
            match callback {
                FrameCallback::CapabilityProbe => {
                    if self.probe_request != Some(request) {
                        continue;
                    }
                    self.probe_request = None;
                    outcome.probed = true;
                    match self.prober.on_frame(now_ms) {
                        Some(tier) => {
                            self.resolve_tier(tier);
                            outcome.became_ready = true;
                        }
                        None => {
                            self.probe_request = Some(self.scheduler.request(FrameCallback::CapabilityProbe));
                        }
                    }
                }
                FrameCallback::Atmosphere => {
                    outcome.atmosphere_stepped |= self.atmosphere.on_frame(request, &mut self.scheduler);
                }
            }
        }

        outcome.colors_changed = self.colors.update();
        outcome
    }

    fn resolve_tier(&mut self, tier: CapabilityTier) {
        // Tier and loading flag flip together
        self.tier = tier;
        self.phase = ViewPhase::Ready;
        self.bump();
        info!(
            "capability tier {} ({} fps measured)",
            tier.name(),
            self.prober.measured_fps().unwrap_or(0)
        );
        self.atmosphere.sync(tier, self.surface, &mut self.scheduler);
    }

    /// Replace the snapshot wholesale.
    ///
    /// The theme is re-derived only when the temperature changed.
    pub fn replace_snapshot(&mut self, snapshot: WeatherSnapshot) {
        let temperature_changed = snapshot.temperature != self.snapshot.temperature;
        self.snapshot = snapshot;
        self.bump();

        if temperature_changed {
            let theme = derive_theme(self.snapshot.temperature, self.theme);
            if theme != self.theme {
                info!("theme {} -> {}", self.theme.tier.name(), theme.tier.name());
                self.theme = theme;
                self.colors.set_targets(theme.colors());
            }
        }

        self.forecast_scroll = self.forecast_scroll.min(forecast_max_scroll(self.snapshot.forecast.len()));
    }

    /// Record a pointer move over the container `bounds`.
    ///
    /// Points outside the container are clamped to its edge. Empty bounds are
    /// ignored.
    pub fn pointer_moved(&mut self, point: Point, bounds: Rectangle) {
        if bounds.size.width == 0 || bounds.size.height == 0 {
            return;
        }
        let w = bounds.size.width as f32;
        let h = bounds.size.height as f32;
        let rel = point - bounds.top_left;
        let x = (rel.x as f32).clamp(0.0, w);
        let y = (rel.y as f32).clamp(0.0, h);
        let pointer = PointerPosition {
            x: x * 100.0 / w,
            y: y * 100.0 / h,
        };
        if pointer != self.pointer {
            self.pointer = pointer;
            self.bump();
        }
    }

    /// Scroll the forecast strip horizontally by `delta_px`.
    pub fn scroll_forecast(&mut self, delta_px: i32) {
        let max = forecast_max_scroll(self.snapshot.forecast.len());
        let next = i64::from(self.forecast_scroll) + i64::from(delta_px);
        let scroll = next.clamp(0, i64::from(max)) as u32;
        if scroll != self.forecast_scroll {
            self.forecast_scroll = scroll;
            self.bump();
        }
    }

    fn bump(&mut self) { self.revision = self.revision.wrapping_add(1); }

    /// Release every frame request. The view stays readable but inert.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.atmosphere.teardown(&mut self.scheduler);
        if let Some(request) = self.probe_request.take() {
            self.scheduler.cancel(request);
        }
        debug!("weather view torn down");
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn snapshot(&self) -> &WeatherSnapshot { &self.snapshot }

    #[inline]
    pub const fn theme(&self) -> Theme { self.theme }

    #[inline]
    pub const fn tier(&self) -> CapabilityTier { self.tier }

    #[inline]
    pub const fn phase(&self) -> ViewPhase { self.phase }

    #[inline]
    pub const fn is_loading(&self) -> bool { matches!(self.phase, ViewPhase::Loading) }

    #[inline]
    pub const fn pointer(&self) -> PointerPosition { self.pointer }

    #[inline]
    pub const fn atmosphere(&self) -> &AtmosphereEffect { &self.atmosphere }

    #[inline]
    pub const fn forecast_scroll(&self) -> u32 { self.forecast_scroll }

    /// Frame requests still waiting to fire.
    #[inline]
    pub fn pending_frames(&self) -> usize { self.scheduler.pending() }

    /// Theme colors as currently displayed (mid-fade during a transition).
    pub fn theme_colors(&self) -> [Rgb565; THEME_SLOTS] {
        core::array::from_fn(|slot| self.colors.get_current(slot))
    }

    /// Milliseconds between the first and the latest tick.
    #[inline]
    pub const fn elapsed_ms(&self) -> u64 {
        match self.first_tick_ms {
            Some(first) => self.last_tick_ms.saturating_sub(first),
            None => 0,
        }
    }

    /// Counter bumped by every change to what the view shows, apart from
    /// animation steps (those are reported by [`TickOutcome`]).
    #[inline]
    pub const fn revision(&self) -> u32 { self.revision }

    /// Drawing surface the atmosphere is sized for.
    #[inline]
    pub const fn surface(&self) -> Size { self.surface }
}
