//! Debounced, edge-triggered input from the two player buttons.
//!
//! Provides [`DebouncedButtons`], which turns raw button levels into at most one
//! press event per physical press, and the [`ButtonInput`] trait for the raw
//! hardware read.

use crate::time::{Instant, Millis};

/// Which player's button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonChannel {
    /// Button at the indicator 1 end.
    Left,
    /// Button at the indicator 8 end.
    Right,
}

/// Logical level of a button, independent of pin polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Pressed,
    #[default]
    Released,
}

/// Trait for abstracting the raw button hardware.
///
/// Implementations translate pin polarity (the board buttons are active-low)
/// into a logical [`Level`]. Handle read errors internally; this method
/// cannot fail.
pub trait ButtonInput {
    /// Reads the current level of one button.
    fn read_level(&mut self, channel: ButtonChannel) -> Level;
}

/// Default minimum time between two accepted presses.
pub const DEBOUNCE_WINDOW: Millis = Millis(20);

/// Edge detector and debouncer over both buttons.
///
/// The debounce window is shared: after a press on either side is accepted,
/// neither side can produce another event until the window has passed. When
/// both buttons show a new press in the same poll, `Right` wins.
pub struct DebouncedButtons<B: ButtonInput> {
    input: B,
    window: Millis,
    previous_left: Level,
    previous_right: Level,
    last_accepted: Instant,
}

impl<B: ButtonInput> DebouncedButtons<B> {
    /// Creates a debouncer with the default 20 ms window.
    pub fn new(input: B) -> Self {
        Self::with_window(input, DEBOUNCE_WINDOW)
    }

    /// Creates a debouncer with a custom window.
    pub fn with_window(input: B, window: Millis) -> Self {
        Self {
            input,
            window,
            previous_left: Level::Released,
            previous_right: Level::Released,
            last_accepted: Instant::EPOCH,
        }
    }

    /// Forgets all edge and debounce history.
    pub fn reset(&mut self) {
        self.previous_left = Level::Released;
        self.previous_right = Level::Released;
        self.last_accepted = Instant::EPOCH;
    }

    /// Polls both buttons and returns the channel of a newly accepted press.
    ///
    /// Inside the debounce window the raw inputs are not read at all, so the
    /// edge history is left untouched. Otherwise both levels are read, `Right`
    /// is checked before `Left`, and both previous levels are refreshed.
    pub fn poll(&mut self, now: Instant) -> Option<ButtonChannel> {
        if now.duration_since(self.last_accepted) < self.window {
            return None;
        }

        let left = self.input.read_level(ButtonChannel::Left);
        let right = self.input.read_level(ButtonChannel::Right);

        let event = if is_press_edge(self.previous_right, right) {
            Some(ButtonChannel::Right)
        } else if is_press_edge(self.previous_left, left) {
            Some(ButtonChannel::Left)
        } else {
            None
        };

        if let Some(channel) = event {
            self.last_accepted = now;
            trace!("press accepted: {:?} at {}", channel, now.ticks());
        }

        self.previous_left = left;
        self.previous_right = right;
        event
    }

    /// Returns the previous level recorded for a channel.
    pub fn previous_level(&self, channel: ButtonChannel) -> Level {
        match channel {
            ButtonChannel::Left => self.previous_left,
            ButtonChannel::Right => self.previous_right,
        }
    }

    /// Returns the instant of the last accepted press.
    pub fn last_accepted(&self) -> Instant {
        self.last_accepted
    }

    /// Returns the debounce window.
    pub fn window(&self) -> Millis {
        self.window
    }

    /// Consumes the debouncer and returns the raw input.
    pub fn release(self) -> B {
        self.input
    }
}

#[inline]
fn is_press_edge(previous: Level, current: Level) -> bool {
    previous == Level::Released && current == Level::Pressed
}
