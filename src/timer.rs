//! Non-blocking elapsed-time timer.

use crate::time::{Instant, Millis, TimeSource};

/// An "armed duration, has it elapsed" timer over a millisecond clock.
///
/// Arming records the current instant and the duration together; [`elapsed`]
/// is a pure query. A zero duration is elapsed immediately.
///
/// [`elapsed`]: ElapsedTimer::elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTimer {
    start: Instant,
    duration: Millis,
}

impl ElapsedTimer {
    /// Creates an unarmed timer. It reports elapsed until armed.
    pub const fn new() -> Self {
        Self {
            start: Instant::EPOCH,
            duration: Millis::ZERO,
        }
    }

    /// Starts the timer at the current time of `time`.
    pub fn arm<T: TimeSource>(&mut self, time: &T, duration: Millis) {
        self.arm_at(time.now(), duration);
    }

    /// Starts the timer at an explicit instant.
    pub fn arm_at(&mut self, start: Instant, duration: Millis) {
        *self = Self { start, duration };
    }

    /// Returns true once the armed duration has passed.
    pub fn elapsed<T: TimeSource>(&self, time: &T) -> bool {
        self.elapsed_at(time.now())
    }

    /// Returns true if `now - start >= duration`, using wrapping arithmetic.
    pub fn elapsed_at(&self, now: Instant) -> bool {
        now.duration_since(self.start) >= self.duration
    }

    /// Returns the instant the timer was armed.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Returns the armed duration.
    pub fn duration(&self) -> Millis {
        self.duration
    }
}
