//! Particle atmosphere effect.
//!
//! A field of slowly drifting, softly pulsing specks drawn over the view
//! background. The effect is decorative and costs a frame callback per frame,
//! so it only runs on [`CapabilityTier::Tier1`] devices.
//!
//! # Lifecycle
//!
//! ```text
//!   sync(Tier1)            on_frame(req)            sync(other) / teardown
//! ───────────────► Active ───────────────► Active ───────────────────────► Inactive
//!   alloc field,            step particles,           cancel pending request,
//!   request frame           request next frame        drop field
//! ```
//!
//! The effect holds at most one pending [`FrameRequest`]. Leaving `Active`
//! always cancels it, so no particle step can run after the drawing surface is
//! gone.
//!
//! # Motion
//!
//! Each particle moves by its velocity every step and wraps at the surface
//! edges. Opacity follows `base * (0.5 + 0.5 * sin(phase + step * PULSE_RATE))`,
//! computed with `micromath` for `no_std` targets.

use embedded_graphics::geometry::Size;
use heapless::Vec;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::capability::CapabilityTier;
use crate::config::{PARTICLE_COUNT, PARTICLE_SEED};
use crate::frames::{FrameCallback, FrameRequest, FrameScheduler};

/// Opacity pulse speed in radians per step.
const PULSE_RATE: f32 = 0.05;

/// Largest per-step speed on either axis, in pixels.
const MAX_SPEED: f32 = 0.6;

/// One speck of the atmosphere.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Current opacity, 0.0-1.0.
    pub opacity: f32,
    base_opacity: f32,
    phase: f32,
}

/// All particles for one drawing surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
    size: Size,
    particles: Vec<Particle, PARTICLE_COUNT>,
    step: u32,
}

impl ParticleField {
    /// Scatter particles over a surface of `size`. An empty surface gets none.
    pub fn new(size: Size, seed: u64) -> Self {
        let mut particles = Vec::new();
        if size.width > 0 && size.height > 0 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let w = size.width as f32;
            let h = size.height as f32;
            for _ in 0..PARTICLE_COUNT {
                let base_opacity = rng.gen_range(0.2..0.8);
                let particle = Particle {
                    x: rng.gen_range(0.0..w),
                    y: rng.gen_range(0.0..h),
                    vx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
                    // Drift upward like rising air
                    vy: -rng.gen_range(0.05..MAX_SPEED),
                    opacity: base_opacity,
                    base_opacity,
                    phase: rng.gen_range(0.0..core::f32::consts::TAU),
                };
                // Capacity is PARTICLE_COUNT
                particles.push(particle).ok();
            }
        }
        Self {
            size,
            particles,
            step: 0,
        }
    }

    /// Advance every particle by one step.
    pub fn step(&mut self) {
        self.step = self.step.wrapping_add(1);
        let w = self.size.width as f32;
        let h = self.size.height as f32;
        let t = self.step as f32 * PULSE_RATE;

        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx, w);
            p.y = wrap(p.y + p.vy, h);
            let pulse = micromath::F32(p.phase + t).sin().0 * 0.5 + 0.5;
            p.opacity = (p.base_opacity * pulse).clamp(0.0, 1.0);
        }
    }

    /// Particles in drawing order.
    #[inline]
    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Surface the field was sized for.
    #[inline]
    pub const fn size(&self) -> Size { self.size }

    /// Steps taken since creation.
    #[inline]
    pub const fn steps(&self) -> u32 { self.step }
}

/// Wrap `value` into `0..limit`.
fn wrap(value: f32, limit: f32) -> f32 {
    if limit <= 0.0 {
        return 0.0;
    }
    let wrapped = if value < 0.0 {
        value + limit
    } else if value >= limit {
        value - limit
    } else {
        value
    };
    // Rounding can land a tiny negative exactly on `limit`
    if (0.0..limit).contains(&wrapped) { wrapped } else { 0.0 }
}

/// Tier-gated particle effect with explicit frame-request ownership.
#[derive(Debug, Default)]
pub struct AtmosphereEffect {
    field: Option<ParticleField>,
    request: Option<FrameRequest>,
}

impl AtmosphereEffect {
    /// Create an inactive effect.
    pub const fn new() -> Self {
        Self {
            field: None,
            request: None,
        }
    }

    /// Start or stop the effect to match `tier`.
    ///
    /// Only [`CapabilityTier::Tier1`] activates it. Returns `true` if the
    /// effect changed state.
    pub fn sync(&mut self, tier: CapabilityTier, surface: Size, scheduler: &mut FrameScheduler) -> bool {
        let wanted = tier == CapabilityTier::Tier1;
        match (wanted, self.is_active()) {
            (true, false) => {
                self.field = Some(ParticleField::new(surface, PARTICLE_SEED));
                self.request = Some(scheduler.request(FrameCallback::Atmosphere));
                info!("atmosphere effect started ({}x{})", surface.width, surface.height);
                true
            }
            (false, true) => {
                self.release(scheduler);
                info!("atmosphere effect stopped ({})", tier.name());
                true
            }
            _ => false,
        }
    }

    /// Handle a fired frame request.
    ///
    /// Requests the effect does not own (stale or foreign) are ignored and
    /// return `false`.
    pub fn on_frame(&mut self, request: FrameRequest, scheduler: &mut FrameScheduler) -> bool {
        if self.request != Some(request) {
            return false;
        }
        self.request = None;

        match self.field.as_mut() {
            Some(field) => {
                field.step();
                self.request = Some(scheduler.request(FrameCallback::Atmosphere));
                true
            }
            None => false,
        }
    }

    /// Release the frame request and the particle field.
    pub fn teardown(&mut self, scheduler: &mut FrameScheduler) {
        if self.is_active() {
            self.release(scheduler);
            debug!("atmosphere effect torn down");
        }
    }

    fn release(&mut self, scheduler: &mut FrameScheduler) {
        if let Some(request) = self.request.take() {
            scheduler.cancel(request);
        }
        self.field = None;
    }

    /// Whether the effect is running.
    #[inline]
    pub const fn is_active(&self) -> bool { self.field.is_some() }

    /// Frame request the effect currently holds.
    #[inline]
    pub const fn pending_request(&self) -> Option<FrameRequest> { self.request }

    /// Current particles; empty while inactive.
    pub fn particles(&self) -> &[Particle] { self.field.as_ref().map_or(&[][..], ParticleField::particles) }

    /// The particle field while active.
    #[inline]
    pub const fn field(&self) -> Option<&ParticleField> { self.field.as_ref() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Size = Size::new(320, 240);

    fn fire(effect: &mut AtmosphereEffect, sched: &mut FrameScheduler) -> usize {
        let mut handled = 0;
        for (req, cb) in sched.take_due() {
            if cb == FrameCallback::Atmosphere && effect.on_frame(req, sched) {
                handled += 1;
            }
        }
        handled
    }

    // -------------------------------------------------------------------------
    // Particle field
    // -------------------------------------------------------------------------

    #[test]
    fn test_field_is_reproducible() {
        let a = ParticleField::new(SURFACE, 7);
        let b = ParticleField::new(SURFACE, 7);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_field_empty_surface() {
        let field = ParticleField::new(Size::zero(), 7);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn test_particles_stay_on_surface() {
        let mut field = ParticleField::new(SURFACE, PARTICLE_SEED);
        for _ in 0..2000 {
            field.step();
            for p in field.particles() {
                assert!((0.0..320.0).contains(&p.x), "x = {} escaped", p.x);
                assert!((0.0..240.0).contains(&p.y), "y = {} escaped", p.y);
                assert!((0.0..=1.0).contains(&p.opacity), "opacity = {}", p.opacity);
            }
        }
        assert_eq!(field.steps(), 2000);
    }

    #[test]
    fn test_wrap() {
        assert!((wrap(-1.0, 10.0) - 9.0).abs() < 1e-6);
        assert!((wrap(10.5, 10.0) - 0.5).abs() < 1e-6);
        assert!((wrap(4.0, 10.0) - 4.0).abs() < 1e-6);
        assert!(wrap(4.0, 0.0).abs() < 1e-6);
    }

    // -------------------------------------------------------------------------
    // Effect lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn test_only_tier1_activates() {
        for tier in [CapabilityTier::Determining, CapabilityTier::Tier2, CapabilityTier::Tier3] {
            let mut sched = FrameScheduler::new();
            let mut effect = AtmosphereEffect::new();
            assert!(!effect.sync(tier, SURFACE, &mut sched));
            assert!(!effect.is_active(), "{tier:?} must not start the effect");
            assert_eq!(sched.pending(), 0);
        }
    }

    #[test]
    fn test_active_effect_keeps_one_request() {
        let mut sched = FrameScheduler::new();
        let mut effect = AtmosphereEffect::new();
        assert!(effect.sync(CapabilityTier::Tier1, SURFACE, &mut sched));
        assert_eq!(sched.pending(), 1);

        for _ in 0..10 {
            assert_eq!(fire(&mut effect, &mut sched), 1);
            assert_eq!(sched.pending(), 1, "effect re-requests exactly one frame");
        }
        assert_eq!(effect.field().map(ParticleField::steps), Some(10));
    }

    #[test]
    fn test_leaving_tier1_cancels_request() {
        let mut sched = FrameScheduler::new();
        let mut effect = AtmosphereEffect::new();
        effect.sync(CapabilityTier::Tier1, SURFACE, &mut sched);
        let req = effect.pending_request().expect("active effect holds a request");

        assert!(effect.sync(CapabilityTier::Tier3, SURFACE, &mut sched));
        assert!(!effect.is_active());
        assert!(!sched.is_pending(req));
        assert_eq!(fire(&mut effect, &mut sched), 0);
    }

    #[test]
    fn test_teardown_releases_everything() {
        let mut sched = FrameScheduler::new();
        let mut effect = AtmosphereEffect::new();
        effect.sync(CapabilityTier::Tier1, SURFACE, &mut sched);
        fire(&mut effect, &mut sched);

        effect.teardown(&mut sched);
        assert!(effect.pending_request().is_none());
        assert!(effect.particles().is_empty());
        assert!(!sched.is_scheduled(FrameCallback::Atmosphere));
    }

    #[test]
    fn test_stale_request_ignored() {
        let mut sched = FrameScheduler::new();
        let mut effect = AtmosphereEffect::new();
        effect.sync(CapabilityTier::Tier1, SURFACE, &mut sched);
        let due = sched.take_due();
        let (old, _) = due[0];
        assert!(effect.on_frame(old, &mut sched));
        // Firing the same handle again is stale now
        assert!(!effect.on_frame(old, &mut sched));
    }
}
