//! Device capability probe and tier classification.
//!
//! The view samples its own frame callbacks for one second, turns the count
//! into an effective frame rate and combines it with a device memory hint:
//!
//! | Memory | FPS | Tier |
//! |--------|-----|------|
//! | ≥ 4 GB | ≥ 50 | [`CapabilityTier::Tier1`] (60 FPS effects) |
//! | ≥ 2 GB | ≥ 30 | [`CapabilityTier::Tier2`] (30 FPS) |
//! | otherwise | | [`CapabilityTier::Tier3`] (15 FPS) |
//!
//! # Frame-Driven Sampling
//!
//! [`CapabilityProber`] never blocks and never reads a clock on its own. The
//! owner hands it a timestamp on every frame callback and it resolves once the
//! sampling window has elapsed. [`probe`] drives the same sampler against any
//! [`FrameClock`], which lets tests script exact frame counts and timings.
//!
//! The probe has no failure path: a missing memory hint falls back to
//! [`DEFAULT_DEVICE_MEMORY_GB`].

use log::debug;

use crate::config::{DEFAULT_DEVICE_MEMORY_GB, MAX_PROBE_FPS, PROBE_WINDOW_MS};
use crate::thresholds::{TIER1_MIN_FPS, TIER1_MIN_MEMORY_GB, TIER2_MIN_FPS, TIER2_MIN_MEMORY_GB};

/// Device capability classification.
///
/// `Determining` is the only valid initial value and is left exactly once.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum CapabilityTier {
    #[default]
    Determining,
    Tier1,
    Tier2,
    Tier3,
}

impl CapabilityTier {
    /// Frame rate the tier is rated for, `None` while still determining.
    pub const fn target_fps(self) -> Option<u32> {
        match self {
            Self::Determining => None,
            Self::Tier1 => Some(60),
            Self::Tier2 => Some(30),
            Self::Tier3 => Some(15),
        }
    }

    /// Whether classification has finished.
    #[inline]
    pub const fn is_determined(self) -> bool { !matches!(self, Self::Determining) }

    /// Short label for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Determining => "determining",
            Self::Tier1 => "tier1",
            Self::Tier2 => "tier2",
            Self::Tier3 => "tier3",
        }
    }
}

/// Classify a device from its memory hint and measured frame rate.
///
/// Monotonic: raising either input without lowering the other never lowers
/// the resulting tier.
pub fn classify(memory_gb: f32, fps: u32) -> CapabilityTier {
    if memory_gb >= TIER1_MIN_MEMORY_GB && fps >= TIER1_MIN_FPS {
        CapabilityTier::Tier1
    } else if memory_gb >= TIER2_MIN_MEMORY_GB && fps >= TIER2_MIN_FPS {
        CapabilityTier::Tier2
    } else {
        CapabilityTier::Tier3
    }
}

/// Effective frames per second, rounded half up and capped at [`MAX_PROBE_FPS`].
///
/// Returns 0 when no time has elapsed.
pub fn effective_fps(frame_count: u32, elapsed_ms: u64) -> u32 {
    if elapsed_ms == 0 {
        return 0;
    }
    let scaled = u64::from(frame_count) * 1000;
    let rounded = (scaled + elapsed_ms / 2) / elapsed_ms;
    rounded.min(u64::from(MAX_PROBE_FPS)) as u32
}

/// Injectable frame and time source.
///
/// The desktop binary implements this over a monotonic clock; tests implement
/// it with scripted timestamps.
pub trait FrameClock {
    /// Current time in milliseconds since an arbitrary fixed origin.
    fn now_ms(&mut self) -> u64;

    /// Block (or simulate blocking) until the next frame is due.
    fn wait_for_frame(&mut self);
}

/// Frame-driven capability sampler.
#[derive(Debug)]
pub struct CapabilityProber {
    memory_gb: f32,
    start_ms: Option<u64>,
    frame_count: u32,
    resolved: Option<(CapabilityTier, u32)>,
}

impl CapabilityProber {
    /// Create a sampler. `None` means the host gave no memory hint.
    pub fn new(memory_hint_gb: Option<f32>) -> Self {
        Self {
            memory_gb: memory_hint_gb.unwrap_or(DEFAULT_DEVICE_MEMORY_GB),
            start_ms: None,
            frame_count: 0,
            resolved: None,
        }
    }

    /// Record one frame callback at `now_ms`.
    ///
    /// Returns the tier exactly once, on the first callback at or past the end
    /// of the sampling window. Every other call returns `None`.
    pub fn on_frame(&mut self, now_ms: u64) -> Option<CapabilityTier> {
        if self.resolved.is_some() {
            return None;
        }

        // The first callback only marks the start; frames are counted after it
        let Some(start) = self.start_ms else {
            self.start_ms = Some(now_ms);
            return None;
        };
        self.frame_count = self.frame_count.saturating_add(1);

        let elapsed = now_ms.saturating_sub(start);
        if elapsed < PROBE_WINDOW_MS {
            return None;
        }

        let fps = effective_fps(self.frame_count, elapsed);
        let tier = classify(self.memory_gb, fps);
        debug!(
            "capability probe: {} frames in {elapsed}ms -> {fps} fps, {} GB -> {}",
            self.frame_count,
            self.memory_gb,
            tier.name()
        );
        self.resolved = Some((tier, fps));
        Some(tier)
    }

    /// Whether the sampler has produced its tier.
    #[inline]
    pub const fn is_resolved(&self) -> bool { self.resolved.is_some() }

    /// Measured frame rate, once resolved.
    #[inline]
    pub fn measured_fps(&self) -> Option<u32> { self.resolved.map(|(_, fps)| fps) }

    /// Memory hint in effect (after defaulting).
    #[inline]
    pub const fn memory_gb(&self) -> f32 { self.memory_gb }
}

/// Run a full probe against `clock`, returning the classified tier.
///
/// Terminates as long as the clock advances.
pub fn probe<C: FrameClock>(clock: &mut C, memory_hint_gb: Option<f32>) -> CapabilityTier {
    let mut prober = CapabilityProber::new(memory_hint_gb);
    loop {
        if let Some(tier) = prober.on_frame(clock.now_ms()) {
            return tier;
        }
        clock.wait_for_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clock that advances a fixed step per frame.
    struct SteppedClock {
        now: u64,
        step: u64,
        frames_waited: u32,
    }

    impl SteppedClock {
        fn new(step: u64) -> Self {
            Self {
                now: 0,
                step,
                frames_waited: 0,
            }
        }
    }

    impl FrameClock for SteppedClock {
        fn now_ms(&mut self) -> u64 { self.now }

        fn wait_for_frame(&mut self) {
            self.now += self.step;
            self.frames_waited += 1;
        }
    }

    // -------------------------------------------------------------------------
    // Classification
    // -------------------------------------------------------------------------

    #[test]
    fn test_classify_scenarios() {
        assert_eq!(classify(4.0, 55), CapabilityTier::Tier1);
        assert_eq!(classify(2.0, 35), CapabilityTier::Tier2);
        assert_eq!(classify(1.0, 10), CapabilityTier::Tier3);
    }

    #[test]
    fn test_classify_boundaries_inclusive() {
        assert_eq!(classify(4.0, 50), CapabilityTier::Tier1);
        assert_eq!(classify(4.0, 49), CapabilityTier::Tier2);
        assert_eq!(classify(3.9, 60), CapabilityTier::Tier2);
        assert_eq!(classify(2.0, 30), CapabilityTier::Tier2);
        assert_eq!(classify(2.0, 29), CapabilityTier::Tier3);
        assert_eq!(classify(1.9, 60), CapabilityTier::Tier3);
    }

    /// Rank where higher is better, for monotonicity checks.
    fn rank(tier: CapabilityTier) -> u8 {
        match tier {
            CapabilityTier::Determining => 0,
            CapabilityTier::Tier3 => 1,
            CapabilityTier::Tier2 => 2,
            CapabilityTier::Tier1 => 3,
        }
    }

    #[test]
    fn test_classify_monotonic() {
        let memories = [0.5f32, 1.0, 2.0, 3.0, 4.0, 8.0];
        for (mi, &m) in memories.iter().enumerate() {
            for fps in 0..=60u32 {
                let base = rank(classify(m, fps));
                if fps < 60 {
                    assert!(rank(classify(m, fps + 1)) >= base, "fps {fps}->{} at {m} GB", fps + 1);
                }
                if let Some(&m2) = memories.get(mi + 1) {
                    assert!(rank(classify(m2, fps)) >= base, "{m}->{m2} GB at {fps} fps");
                }
            }
        }
    }

    #[test]
    fn test_classify_never_determining() {
        assert!(classify(0.0, 0).is_determined());
    }

    // -------------------------------------------------------------------------
    // Frame rate
    // -------------------------------------------------------------------------

    #[test]
    fn test_effective_fps_rounding() {
        assert_eq!(effective_fps(55, 1000), 55);
        // 45 frames in 1010ms = 44.55 -> 45
        assert_eq!(effective_fps(45, 1010), 45);
        // 30 frames in 1020ms = 29.41 -> 29
        assert_eq!(effective_fps(30, 1020), 29);
    }

    #[test]
    fn test_effective_fps_capped() {
        assert_eq!(effective_fps(144, 1000), MAX_PROBE_FPS);
    }

    #[test]
    fn test_effective_fps_zero_elapsed() {
        assert_eq!(effective_fps(10, 0), 0);
    }

    // -------------------------------------------------------------------------
    // Prober
    // -------------------------------------------------------------------------

    #[test]
    fn test_prober_resolves_once_after_window() {
        let mut prober = CapabilityProber::new(Some(4.0));
        let mut resolved = 0;
        let mut now = 1_000_000u64; // arbitrary origin
        for _ in 0..200 {
            if prober.on_frame(now).is_some() {
                resolved += 1;
            }
            now += 16;
        }
        assert_eq!(resolved, 1, "prober must resolve exactly once");
        assert!(prober.is_resolved());
    }

    #[test]
    fn test_prober_waits_full_window() {
        let mut prober = CapabilityProber::new(None);
        assert_eq!(prober.on_frame(0), None);
        assert_eq!(prober.on_frame(500), None);
        assert_eq!(prober.on_frame(999), None);
        assert!(prober.on_frame(1000).is_some());
    }

    #[test]
    fn test_prober_default_memory() {
        let prober = CapabilityProber::new(None);
        assert!((prober.memory_gb() - DEFAULT_DEVICE_MEMORY_GB).abs() < f32::EPSILON);
    }

    #[test]
    fn test_probe_fast_clock_is_tier1() {
        // 20ms frames: 50 frames over 1000ms -> 50 fps
        let mut clock = SteppedClock::new(20);
        assert_eq!(probe(&mut clock, Some(4.0)), CapabilityTier::Tier1);
        assert_eq!(clock.frames_waited, 50);
    }

    /// Clock that spreads `frames` waits evenly over exactly one second.
    struct EvenSecondClock {
        frames: u64,
        waited: u64,
    }

    impl FrameClock for EvenSecondClock {
        fn now_ms(&mut self) -> u64 { (self.waited * 1000 + self.frames / 2) / self.frames }

        fn wait_for_frame(&mut self) { self.waited += 1; }
    }

    #[test]
    fn test_probe_49_fps_is_below_tier1() {
        let mut clock = EvenSecondClock { frames: 49, waited: 0 };
        assert_eq!(probe(&mut clock, Some(4.0)), CapabilityTier::Tier2, "49 frames in 1000ms is 49 fps");
        assert_eq!(clock.waited, 49);
    }

    #[test]
    fn test_prober_first_callback_only_starts_window() {
        let mut prober = CapabilityProber::new(Some(4.0));
        assert_eq!(prober.on_frame(0), None);
        // 30 frames after the start, 1000ms later: exactly the tier2 bound
        for k in 1..30u64 {
            assert_eq!(prober.on_frame(k * 33), None);
        }
        assert_eq!(prober.on_frame(1000), Some(CapabilityTier::Tier2));
        assert_eq!(prober.measured_fps(), Some(30));
    }

    #[test]
    fn test_probe_slow_clock_is_tier2() {
        // 30ms frames: 34 frames over 1020ms -> 33 fps
        let mut clock = SteppedClock::new(30);
        assert_eq!(probe(&mut clock, Some(2.0)), CapabilityTier::Tier2);
    }

    #[test]
    fn test_probe_very_slow_clock_is_tier3() {
        // 100ms frames: 10 frames over 1000ms -> 10 fps
        let mut clock = SteppedClock::new(100);
        assert_eq!(probe(&mut clock, Some(8.0)), CapabilityTier::Tier3);
    }

    #[test]
    fn test_probe_low_memory_caps_tier() {
        let mut clock = SteppedClock::new(16);
        assert_eq!(probe(&mut clock, Some(1.0)), CapabilityTier::Tier3);
    }

    #[test]
    fn test_target_fps() {
        assert_eq!(CapabilityTier::Determining.target_fps(), None);
        assert_eq!(CapabilityTier::Tier1.target_fps(), Some(60));
        assert_eq!(CapabilityTier::Tier2.target_fps(), Some(30));
        assert_eq!(CapabilityTier::Tier3.target_fps(), Some(15));
    }
}
