//! Game tuning constants and their validation.

use crate::button::DEBOUNCE_WINDOW;
use crate::display::SIDE_INDICATORS;
use crate::time::Millis;

/// Tunable game parameters.
///
/// [`Default`] gives the standard rules: first to 5, ball tick starting at
/// 200 ms and shortening by 20 ms per return down to 100 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Points needed to win a game.
    pub winning_score: u8,
    /// Ball tick at the start of every rally.
    pub initial_speed: Millis,
    /// Shortest ball tick a rally can reach.
    pub min_speed: Millis,
    /// Amount the ball tick shortens on each successful return.
    pub speed_decrease: Millis,
    /// How long the score is shown after each point.
    pub score_display_time: Millis,
    /// Argument passed to the winner animation.
    pub winner_display_time: Millis,
    /// How long the final score is shown once a game is over.
    pub final_score_display_time: Millis,
    /// Minimum time between two accepted button presses.
    pub debounce_window: Millis,
}

impl GameConfig {
    /// The standard rules.
    pub const DEFAULT: Self = Self {
        winning_score: 5,
        initial_speed: Millis(200),
        min_speed: Millis(100),
        speed_decrease: Millis(20),
        score_display_time: Millis(2000),
        winner_display_time: Millis(3000),
        final_score_display_time: Millis(3000),
        debounce_window: DEBOUNCE_WINDOW,
    };

    /// Checks that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_score == 0 || self.winning_score > SIDE_INDICATORS + 1 {
            return Err(ConfigError::WinningScoreOutOfRange(self.winning_score));
        }
        if self.min_speed == Millis::ZERO {
            return Err(ConfigError::ZeroMinSpeed);
        }
        if self.min_speed > self.initial_speed {
            return Err(ConfigError::MinSpeedAboveInitial {
                min: self.min_speed,
                initial: self.initial_speed,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Winning score is zero or cannot be displayed on one side of the bar.
    WinningScoreOutOfRange(u8),

    /// Minimum ball tick is zero.
    ZeroMinSpeed,

    /// Minimum ball tick is longer than the starting tick.
    MinSpeedAboveInitial { min: Millis, initial: Millis },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::WinningScoreOutOfRange(score) => {
                write!(
                    f,
                    "winning score {} out of range 1..={}",
                    score,
                    SIDE_INDICATORS + 1
                )
            }
            ConfigError::ZeroMinSpeed => {
                write!(f, "minimum ball speed must be non-zero")
            }
            ConfigError::MinSpeedAboveInitial { min, initial } => {
                write!(
                    f,
                    "minimum ball speed {}ms exceeds initial speed {}ms",
                    min.as_millis(),
                    initial.as_millis()
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
