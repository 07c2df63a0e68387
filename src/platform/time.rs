//! Frame clock
//!
//! Simulation time advances in whole frames at a fixed rate. Wall-clock
//! timers (decay, spawning) compare against `FrameClock::now_ms`.

use crate::frames_to_ms;

/// Monotonic fixed-rate tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    frame: u64,
    frame_rate: u32,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame: 0,
            frame_rate: frame_rate.max(1),
        }
    }

    /// Move to the next frame and return its index
    pub fn advance(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Simulated milliseconds since the clock started
    pub fn now_ms(&self) -> u64 {
        frames_to_ms(self.frame, self.frame_rate)
    }
}

/// Sleeps so frames run at wall-clock speed (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FramePacer {
    frame_duration: std::time::Duration,
    next_frame: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl FramePacer {
    pub fn new(frame_rate: u32) -> Self {
        let frame_duration = std::time::Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64);
        Self {
            frame_duration,
            next_frame: std::time::Instant::now() + frame_duration,
        }
    }

    /// Wait for the next frame boundary. A late frame does not try to catch up.
    pub fn wait(&mut self) {
        let now = std::time::Instant::now();
        if let Some(remaining) = self.next_frame.checked_duration_since(now) {
            spin_sleep::sleep(remaining);
            self.next_frame += self.frame_duration;
        } else {
            self.next_frame = now + self.frame_duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_at_60hz() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.now_ms(), 0);
        for _ in 0..60 {
            clock.advance();
        }
        assert_eq!(clock.frame(), 60);
        assert_eq!(clock.now_ms(), 1000);
    }

    #[test]
    fn test_decay_interval_reached_after_300_frames() {
        let mut clock = FrameClock::new(60);
        for _ in 0..299 {
            clock.advance();
        }
        assert!(clock.now_ms() < 5000);
        clock.advance();
        assert_eq!(clock.now_ms(), 5000);
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.frame_rate(), 1);
    }
}
