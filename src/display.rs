//! Blocking score, winner and flash animations on the indicator bar.
//!
//! Everything here sleeps through [`Delay`] and reads no input. Callers accept
//! that button presses during these animations are not observed.

use crate::button::ButtonChannel;
use crate::indicator::{INDICATOR_COUNT, IndicatorBar};
use crate::time::{Delay, Millis};

/// Indicators available to each player's half of the bar.
pub const SIDE_INDICATORS: u8 = INDICATOR_COUNT / 2;

const SCORE_CLEAR_PAUSE: Millis = Millis(100);

const WINNER_BLINKS: u8 = 5;
const WINNER_BLINK_ON: Millis = Millis(300);
const WINNER_BLINK_OFF: Millis = Millis(200);
const WINNER_FINALE: Millis = Millis(500);

/// Shows both scores, holds them for `hold`, then clears the bar.
///
/// `left` indicators are lit counting inward from indicator 1 and `right`
/// indicators counting inward from indicator 8. Each side is capped at
/// [`SIDE_INDICATORS`].
pub fn show_score<L, D>(bar: &mut L, delay: &mut D, right: u8, left: u8, hold: Millis)
where
    L: IndicatorBar + ?Sized,
    D: Delay + ?Sized,
{
    bar.clear();
    delay.delay(SCORE_CLEAR_PAUSE);

    for i in 1..=left.min(SIDE_INDICATORS) {
        bar.set(i, true);
    }
    for i in 0..right.min(SIDE_INDICATORS) {
        bar.set(INDICATOR_COUNT - i, true);
    }

    delay.delay(hold);
    bar.clear();
}

/// Blinks the winner's half of the bar, then flashes the whole bar.
///
/// The animation always takes five 500 ms blink cycles plus a 500 ms finale.
/// `_duration` is accepted for call-site symmetry with [`show_score`] but does
/// not pace the animation.
pub fn show_winner<L, D>(bar: &mut L, delay: &mut D, side: ButtonChannel, _duration: Millis)
where
    L: IndicatorBar + ?Sized,
    D: Delay + ?Sized,
{
    let half = match side {
        ButtonChannel::Left => 1..=SIDE_INDICATORS,
        ButtonChannel::Right => SIDE_INDICATORS + 1..=INDICATOR_COUNT,
    };

    for _ in 0..WINNER_BLINKS {
        for i in half.clone() {
            bar.set(i, true);
        }
        delay.delay(WINNER_BLINK_ON);
        bar.clear();
        delay.delay(WINNER_BLINK_OFF);
    }

    bar.all_on();
    delay.delay(WINNER_FINALE);
    bar.clear();
}

/// Flashes the whole bar `times` times, each flash `on` lit then `off` dark.
pub fn flash_all<L, D>(bar: &mut L, delay: &mut D, times: u8, on: Millis, off: Millis)
where
    L: IndicatorBar + ?Sized,
    D: Delay + ?Sized,
{
    for _ in 0..times {
        bar.all_on();
        delay.delay(on);
        bar.clear();
        delay.delay(off);
    }
}

/// Runs one pass of the board test pattern.
///
/// Slow walk left to right, fast sweep there and back, then three full
/// flashes. Useful for checking wiring and pin order during bring-up.
pub fn self_test<L, D>(bar: &mut L, delay: &mut D)
where
    L: IndicatorBar + ?Sized,
    D: Delay + ?Sized,
{
    for i in 1..=INDICATOR_COUNT {
        bar.show_only(i);
        delay.delay(Millis(500));
    }
    bar.clear();
    delay.delay(Millis(500));

    for i in 1..=INDICATOR_COUNT {
        bar.show_only(i);
        delay.delay(Millis(100));
    }
    for i in (1..=INDICATOR_COUNT).rev() {
        bar.show_only(i);
        delay.delay(Millis(100));
    }
    bar.clear();
    delay.delay(Millis(500));

    flash_all(bar, delay, 3, Millis(300), Millis(300));
    delay.delay(Millis(1000));
}
