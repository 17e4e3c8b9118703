//! Shared test infrastructure for led-pong integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use led_pong::{
    ButtonChannel, ButtonInput, Delay, Game, IndicatorBar, Instant, Level, Millis, TimeSource,
};

// ============================================================================
// Mock Clock
// ============================================================================

/// Millisecond clock that moves forward by `step` on every `now()` call.
///
/// Auto-advance lets busy-poll loops terminate without a real timer.
pub struct MockClock {
    ticks: Cell<u32>,
    step: Cell<u32>,
}

impl MockClock {
    pub fn new(start: u32) -> Self {
        Self {
            ticks: Cell::new(start),
            step: Cell::new(1),
        }
    }

    /// Current tick without advancing.
    pub fn peek(&self) -> u32 {
        self.ticks.get()
    }

    pub fn set(&self, ticks: u32) {
        self.ticks.set(ticks);
    }

    pub fn advance(&self, ms: u32) {
        self.ticks.set(self.ticks.get().wrapping_add(ms));
    }

    pub fn set_step(&self, step: u32) {
        self.step.set(step);
    }
}

impl TimeSource for MockClock {
    fn now(&self) -> Instant {
        let ticks = self.ticks.get();
        self.ticks.set(ticks.wrapping_add(self.step.get()));
        Instant::from_ticks(ticks)
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances the mock clock and records every pause.
///
/// Each pause also captures the bar mask shared with [`MockBar`], so
/// `frames()` is what a viewer would actually see, one entry per hold.
pub struct MockDelay<'a> {
    clock: &'a MockClock,
    lit: &'a Cell<u8>,
    total: u32,
    pauses: heapless::Vec<u32, 128>,
    frames: heapless::Vec<u8, 128>,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockClock, lit: &'a Cell<u8>) -> Self {
        Self {
            clock,
            lit,
            total: 0,
            pauses: heapless::Vec::new(),
            frames: heapless::Vec::new(),
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn pauses(&self) -> &[u32] {
        &self.pauses
    }

    /// Bar masks held during each pause, in order.
    pub fn frames(&self) -> &[u8] {
        &self.frames
    }

    /// Number of held frames equal to `mask`.
    pub fn count_frames(&self, mask: u8) -> usize {
        self.frames.iter().filter(|&&m| m == mask).count()
    }

    /// Bitwise OR of every held frame.
    pub fn peak(&self) -> u8 {
        self.frames.iter().fold(0, |acc, m| acc | m)
    }
}

impl Delay for MockDelay<'_> {
    fn delay(&mut self, duration: Millis) {
        self.clock.advance(duration.as_millis());
        self.total += duration.as_millis();
        let _ = self.pauses.push(duration.as_millis());
        let _ = self.frames.push(self.lit.get());
    }
}

// ============================================================================
// Mock Indicator Bar
// ============================================================================

/// Indicator bar that publishes its state as a bitmask in a shared cell.
///
/// Bit 0 is indicator 1 (left end), bit 7 is indicator 8 (right end).
pub struct MockBar<'a> {
    lit: &'a Cell<u8>,
}

impl<'a> MockBar<'a> {
    pub fn new(lit: &'a Cell<u8>) -> Self {
        Self { lit }
    }

    pub fn mask(&self) -> u8 {
        self.lit.get()
    }
}

impl IndicatorBar for MockBar<'_> {
    fn set(&mut self, index: u8, on: bool) {
        if !(1..=8).contains(&index) {
            return;
        }
        let bit = 1 << (index - 1);
        let mask = self.lit.get();
        self.lit.set(if on { mask | bit } else { mask & !bit });
    }
}

// ============================================================================
// Scripted Buttons
// ============================================================================

/// A button held down for `[from, until)` in mock clock ticks.
#[derive(Debug, Clone, Copy)]
pub struct Hold {
    pub channel: ButtonChannel,
    pub from: u32,
    pub until: u32,
}

/// Button presses scheduled against the mock clock.
pub struct Script {
    holds: RefCell<heapless::Vec<Hold, 32>>,
}

impl Script {
    pub fn new() -> Self {
        Self {
            holds: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Holds `channel` down from `from` for `length` ms.
    pub fn press(&self, channel: ButtonChannel, from: u32, length: u32) {
        let _ = self.holds.borrow_mut().push(Hold {
            channel,
            from,
            until: from.wrapping_add(length),
        });
    }

    pub fn level_at(&self, channel: ButtonChannel, ticks: u32) -> Level {
        let held = self
            .holds
            .borrow()
            .iter()
            .any(|h| h.channel == channel && ticks.wrapping_sub(h.from) < h.until.wrapping_sub(h.from));
        if held { Level::Pressed } else { Level::Released }
    }
}

/// Raw button input that reads levels from a [`Script`].
pub struct ScriptedButtons<'a> {
    clock: &'a MockClock,
    script: &'a Script,
    reads: u32,
}

impl<'a> ScriptedButtons<'a> {
    pub fn new(clock: &'a MockClock, script: &'a Script) -> Self {
        Self {
            clock,
            script,
            reads: 0,
        }
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl ButtonInput for ScriptedButtons<'_> {
    fn read_level(&mut self, channel: ButtonChannel) -> Level {
        self.reads += 1;
        self.script.level_at(channel, self.clock.peek())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestGame<'a> = Game<'a, MockBar<'a>, ScriptedButtons<'a>, MockClock, MockDelay<'a>>;

/// Builds a game with the standard rules over mock hardware.
pub fn new_game<'a>(clock: &'a MockClock, script: &'a Script, lit: &'a Cell<u8>) -> TestGame<'a> {
    Game::new(
        MockBar::new(lit),
        ScriptedButtons::new(clock, script),
        clock,
        MockDelay::new(clock, lit),
    )
}

/// Bitmask for a set of indicators.
pub fn indicators(indices: &[u8]) -> u8 {
    indices.iter().fold(0, |acc, i| acc | (1 << (i - 1)))
}
