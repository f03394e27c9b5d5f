//! Wall-clock frame source.

use std::thread;
use std::time::{Duration, Instant};

use weather_common::FrameClock;

/// Monotonic clock that paces frames to a fixed frame time.
#[derive(Debug)]
pub struct InstantClock {
    origin: Instant,
    frame_start: Instant,
    frame_time: Duration,
}

impl InstantClock {
    pub fn new(frame_time: Duration) -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            frame_start: now,
            frame_time,
        }
    }
}

impl FrameClock for InstantClock {
    fn now_ms(&mut self) -> u64 { u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX) }

    /// Sleep off whatever is left of the current frame, then start the next.
    fn wait_for_frame(&mut self) {
        let spent = self.frame_start.elapsed();
        if let Some(remaining) = self.frame_time.checked_sub(spent) {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let mut clock = InstantClock::new(Duration::from_millis(1));
        let a = clock.now_ms();
        clock.wait_for_frame();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_wait_paces_frames() {
        let mut clock = InstantClock::new(Duration::from_millis(5));
        let start = Instant::now();
        for _ in 0..3 {
            clock.wait_for_frame();
        }
        assert!(start.elapsed() >= Duration::from_millis(10), "three frames take at least ~15ms");
    }

    #[test]
    fn test_probe_with_wall_clock_terminates() {
        let mut clock = InstantClock::new(Duration::from_millis(16));
        let tier = weather_common::capability::probe(&mut clock, Some(4.0));
        assert!(tier.is_determined());
    }
}
