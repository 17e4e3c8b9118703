//! Integration tests for DebouncedButtons and ElapsedTimer

mod common;
use common::*;

use led_pong::{ButtonChannel, DebouncedButtons, ElapsedTimer, Instant, Millis, TimeSource};

/// Polls once per millisecond over `[from, until)` and collects events.
fn poll_range(
    buttons: &mut DebouncedButtons<ScriptedButtons<'_>>,
    clock: &MockClock,
    from: u32,
    until: u32,
) -> heapless::Vec<(u32, ButtonChannel), 16> {
    let mut events = heapless::Vec::new();
    for t in from..until {
        clock.set(t);
        if let Some(channel) = buttons.poll(Instant::from_ticks(t)) {
            let _ = events.push((t, channel));
        }
    }
    events
}

#[test]
fn bouncing_press_inside_window_emits_once() {
    let clock = MockClock::new(0);
    let script = Script::new();
    script.press(ButtonChannel::Left, 100, 5);
    script.press(ButtonChannel::Left, 110, 5);
    let mut buttons = DebouncedButtons::new(ScriptedButtons::new(&clock, &script));

    let events = poll_range(&mut buttons, &clock, 90, 200);

    assert_eq!(events.as_slice(), &[(100, ButtonChannel::Left)]);
}

#[test]
fn separate_presses_outside_window_emit_twice() {
    let clock = MockClock::new(0);
    let script = Script::new();
    script.press(ButtonChannel::Right, 100, 10);
    script.press(ButtonChannel::Right, 150, 10);
    let mut buttons = DebouncedButtons::new(ScriptedButtons::new(&clock, &script));

    let events = poll_range(&mut buttons, &clock, 90, 200);

    assert_eq!(
        events.as_slice(),
        &[(100, ButtonChannel::Right), (150, ButtonChannel::Right)]
    );
}

#[test]
fn held_button_emits_once() {
    let clock = MockClock::new(0);
    let script = Script::new();
    script.press(ButtonChannel::Left, 50, 1000);
    let mut buttons = DebouncedButtons::new(ScriptedButtons::new(&clock, &script));

    let events = poll_range(&mut buttons, &clock, 40, 1100);

    assert_eq!(events.len(), 1);
}

#[test]
fn simultaneous_edges_emit_right_only() {
    let clock = MockClock::new(0);
    let script = Script::new();
    script.press(ButtonChannel::Left, 100, 50);
    script.press(ButtonChannel::Right, 100, 50);
    let mut buttons = DebouncedButtons::new(ScriptedButtons::new(&clock, &script));

    let events = poll_range(&mut buttons, &clock, 90, 300);

    assert_eq!(events.as_slice(), &[(100, ButtonChannel::Right)]);
}

#[test]
fn press_on_one_side_masks_the_other_for_the_window() {
    let clock = MockClock::new(0);
    let script = Script::new();
    script.press(ButtonChannel::Right, 100, 3);
    script.press(ButtonChannel::Left, 105, 5);
    let mut buttons = DebouncedButtons::new(ScriptedButtons::new(&clock, &script));

    let events = poll_range(&mut buttons, &clock, 90, 200);

    // The left press ended before the window closed, so it is never seen.
    assert_eq!(events.as_slice(), &[(100, ButtonChannel::Right)]);
}

#[test]
fn inputs_are_not_read_inside_window() {
    let clock = MockClock::new(0);
    let script = Script::new();
    script.press(ButtonChannel::Right, 100, 3);
    let mut buttons = DebouncedButtons::new(ScriptedButtons::new(&clock, &script));

    poll_range(&mut buttons, &clock, 100, 101);
    poll_range(&mut buttons, &clock, 101, 120);

    assert_eq!(buttons.release().reads(), 2);
}

#[test]
fn timer_is_running_immediately_after_arming() {
    let clock = MockClock::new(5000);
    clock.set_step(0);
    let mut timer = ElapsedTimer::new();

    for d in [1, 20, 200, u32::MAX] {
        timer.arm(&clock, Millis(d));
        assert!(!timer.elapsed(&clock));
    }
}

#[test]
fn timer_elapses_after_duration_across_rollover() {
    let clock = MockClock::new(u32::MAX - 99);
    clock.set_step(0);
    let mut timer = ElapsedTimer::new();
    timer.arm(&clock, Millis(200));

    clock.advance(199);
    assert!(!timer.elapsed(&clock));
    clock.advance(1);
    assert!(timer.elapsed(&clock));
    assert_eq!(clock.now(), Instant::from_ticks(100));
}
