//! Hardware abstraction for the eight-indicator bar.

/// Number of indicators on the bar.
pub const INDICATOR_COUNT: u8 = 8;

/// Trait for abstracting the indicator bar hardware.
///
/// Indicators are numbered 1 (left end) through [`INDICATOR_COUNT`] (right
/// end). Implement [`set`](IndicatorBar::set) for your hardware; the other
/// operations have default implementations built on it. Handle hardware errors
/// internally; these methods cannot fail.
pub trait IndicatorBar {
    /// Turns a single indicator on or off, leaving the others unchanged.
    ///
    /// Out-of-range indices are ignored.
    fn set(&mut self, index: u8, on: bool);

    /// Lights exactly one indicator and turns all others off.
    ///
    /// Out-of-range indices are a no-op: the bar is left untouched.
    fn show_only(&mut self, index: u8) {
        if !is_valid_index(index) {
            return;
        }
        for i in 1..=INDICATOR_COUNT {
            self.set(i, i == index);
        }
    }

    /// Turns every indicator off.
    fn clear(&mut self) {
        for i in 1..=INDICATOR_COUNT {
            self.set(i, false);
        }
    }

    /// Turns every indicator on.
    fn all_on(&mut self) {
        for i in 1..=INDICATOR_COUNT {
            self.set(i, true);
        }
    }
}

impl<B: IndicatorBar + ?Sized> IndicatorBar for &mut B {
    fn set(&mut self, index: u8, on: bool) {
        (**self).set(index, on)
    }

    fn show_only(&mut self, index: u8) {
        (**self).show_only(index)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn all_on(&mut self) {
        (**self).all_on()
    }
}

/// Returns true if `index` addresses an indicator on the bar.
#[inline]
pub fn is_valid_index(index: u8) -> bool {
    (1..=INDICATOR_COUNT).contains(&index)
}
