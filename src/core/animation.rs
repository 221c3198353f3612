//! Height animation - eased interpolation of a panel height over time.
//!
//! Time is passed in explicitly (seconds, as reported by `egui::InputState::time`)
//! so the animation advances only when the host loop ticks it:
//! 1. `start()` records the begin timestamp, start and end heights
//! 2. `value_at()` samples the eased height at any timestamp
//! 3. `is_finished()` reports when the duration has elapsed
//!
//! Restarting while in flight is done by sampling the current value and
//! starting a new animation from there, so there is no visual snap.

use eframe::egui::emath::easing;
use std::time::Duration;

/// Default dwell time of an expand/collapse animation
pub const DEFAULT_DURATION_MS: u64 = 250;

/// Single height interpolation (start -> end) with cubic in/out easing.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightAnimation {
    from: f32,
    to: f32,
    started_at: f64,
    duration: Duration,
}

impl HeightAnimation {
    /// Start a new animation at `now` from `from` to `to`.
    pub fn start(from: f32, to: f32, now: f64, duration: Duration) -> Self {
        log::trace!(
            "HeightAnimation: {:.1} -> {:.1} over {}ms",
            from,
            to,
            duration.as_millis()
        );
        Self {
            from,
            to,
            started_at: now,
            duration,
        }
    }

    /// Normalized progress in 0..=1 at `now`.
    pub fn progress(&self, now: f64) -> f32 {
        let secs = self.duration.as_secs_f64();
        if secs <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / secs).clamp(0.0, 1.0) as f32
    }

    /// Eased height at `now`.
    pub fn value_at(&self, now: f64) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        let eased = easing::cubic_in_out(t);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
