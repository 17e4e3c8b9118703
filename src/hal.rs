//! Adapters from `embedded-hal` 1.0 pins and delays to the game's traits.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::button::{ButtonChannel, ButtonInput, Level};
use crate::indicator::{INDICATOR_COUNT, IndicatorBar, is_valid_index};
use crate::time::{Delay, Millis};

/// Indicator bar built from eight push-pull outputs, active-high.
///
/// `pins[0]` is indicator 1 (left end). Pin errors are ignored.
///
/// All eight pins share one type. Boards that spread the bar over several
/// GPIO ports must type-erase the pins first (`degrade()` / `erase()` in most
/// HAL crates).
pub struct PinBar<P: OutputPin> {
    pins: [P; INDICATOR_COUNT as usize],
}

impl<P: OutputPin> PinBar<P> {
    /// Creates a bar and turns every indicator off.
    pub fn new(pins: [P; INDICATOR_COUNT as usize]) -> Self {
        let mut bar = Self { pins };
        bar.clear();
        bar
    }

    /// Consumes the bar and returns the pins.
    pub fn release(self) -> [P; INDICATOR_COUNT as usize] {
        self.pins
    }
}

impl<P: OutputPin> IndicatorBar for PinBar<P> {
    fn set(&mut self, index: u8, on: bool) {
        if !is_valid_index(index) {
            return;
        }
        let pin = &mut self.pins[usize::from(index - 1)];
        let _ = if on { pin.set_high() } else { pin.set_low() };
    }
}

/// Two pull-up inputs that read low while the button is held.
///
/// A failed read is reported as [`Level::Released`].
pub struct ActiveLowButtons<LP: InputPin, RP: InputPin> {
    left: LP,
    right: RP,
}

impl<LP: InputPin, RP: InputPin> ActiveLowButtons<LP, RP> {
    /// Wraps two pins already configured as pull-up inputs.
    pub fn new(left: LP, right: RP) -> Self {
        Self { left, right }
    }

    /// Consumes the wrapper and returns `(left, right)`.
    pub fn release(self) -> (LP, RP) {
        (self.left, self.right)
    }
}

impl<LP: InputPin, RP: InputPin> ButtonInput for ActiveLowButtons<LP, RP> {
    fn read_level(&mut self, channel: ButtonChannel) -> Level {
        let low = match channel {
            ButtonChannel::Left => self.left.is_low().unwrap_or(false),
            ButtonChannel::Right => self.right.is_low().unwrap_or(false),
        };
        if low { Level::Pressed } else { Level::Released }
    }
}

/// [`Delay`] backed by an `embedded-hal` delay provider.
pub struct HalDelay<D: DelayNs>(pub D);

impl<D: DelayNs> Delay for HalDelay<D> {
    fn delay(&mut self, duration: Millis) {
        self.0.delay_ms(duration.as_millis());
    }
}
