#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Game`**: The state machine that serves, moves and returns the ball and keeps score
//! - **`GameState`**: `Start`, `BallMoving(Direction)`, `PointScored` or `GameOver`
//! - **`GameConfig`**: Winning score, ball speeds, display times and debounce window
//! - **`DebouncedButtons`**: Edge-triggered, debounced presses from the two player buttons
//! - **`ElapsedTimer`**: "Has this armed duration passed" over a wrapping millisecond clock
//! - **`IndicatorBar`**: Trait to implement for your eight indicators
//! - **`ButtonInput`**: Trait to implement for your two buttons
//! - **`TimeSource`** / **`Delay`**: Traits to implement for your clock and blocking pauses
//!
//! The [`hal`] module implements the hardware traits for any `embedded-hal` 1.0
//! pins and delay provider.

mod fmt;

pub mod time;
pub mod timer;
pub mod button;
pub mod indicator;
pub mod display;
pub mod config;
pub mod game;
pub mod hal;

pub use button::{ButtonChannel, ButtonInput, DEBOUNCE_WINDOW, DebouncedButtons, Level};
pub use config::{ConfigError, GameConfig};
pub use display::{SIDE_INDICATORS, flash_all, self_test, show_score, show_winner};
pub use game::{Direction, Game, GameState, MatchState, START_POSITION};
pub use indicator::{INDICATOR_COUNT, IndicatorBar};
pub use time::{Delay, Instant, Millis, TimeSource};
pub use timer::ElapsedTimer;
