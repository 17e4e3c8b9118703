//! Millisecond time abstractions for platform-agnostic timing.
//!
//! The game runs on a free-running 32-bit millisecond tick (a SysTick counter on
//! most boards) that wraps roughly every 49.7 days. All arithmetic on
//! [`Instant`] is wrapping so a rollover never stalls a timer.

/// A span of time in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Zero duration constant.
    pub const ZERO: Self = Millis(0);

    /// Creates a duration from milliseconds.
    #[inline]
    pub const fn from_millis(millis: u32) -> Self {
        Millis(millis)
    }

    /// Returns the duration in milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// Saturating subtraction (returns ZERO on underflow).
    #[inline]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Millis(self.0.saturating_sub(other.0))
    }
}

/// A reading of the millisecond tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// The counter value at power-on.
    pub const EPOCH: Self = Instant(0);

    /// Creates an instant from a raw tick count.
    #[inline]
    pub const fn from_ticks(ticks: u32) -> Self {
        Instant(ticks)
    }

    /// Returns the raw tick count.
    #[inline]
    pub const fn ticks(&self) -> u32 {
        self.0
    }

    /// Calculates the duration since an earlier instant.
    ///
    /// Uses wrapping subtraction, so the result is correct across a single
    /// counter rollover between `earlier` and `self`.
    #[inline]
    pub const fn duration_since(&self, earlier: Self) -> Millis {
        Millis(self.0.wrapping_sub(earlier.0))
    }

    /// Adds a duration, wrapping on counter overflow.
    #[inline]
    pub const fn wrapping_add(self, duration: Millis) -> Self {
        Instant(self.0.wrapping_add(duration.0))
    }
}

/// Trait for abstracting the monotonic millisecond clock.
pub trait TimeSource {
    /// Returns the current time instant.
    fn now(&self) -> Instant;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Trait for blocking pauses.
///
/// Only used by fixed animations (score reveal, flashes); the ball loop never
/// sleeps.
pub trait Delay {
    /// Blocks for the given duration.
    fn delay(&mut self, duration: Millis);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay(&mut self, duration: Millis) {
        (**self).delay(duration)
    }
}
