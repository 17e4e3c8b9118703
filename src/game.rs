//! The ping-pong game engine.
//!
//! Provides [`Game`], a state machine that owns the ball and both scores,
//! drives the indicator bar and polls the debounced buttons while each ball
//! tick runs. The machine has no terminal state: a finished game loops back to
//! [`GameState::Start`] with fresh scores.

use crate::button::{ButtonChannel, ButtonInput, DebouncedButtons};
use crate::config::{ConfigError, GameConfig};
use crate::display;
use crate::indicator::{INDICATOR_COUNT, IndicatorBar, is_valid_index};
use crate::time::{Delay, Millis, TimeSource};
use crate::timer::ElapsedTimer;

/// Ball position at the start of every rally.
pub const START_POSITION: u8 = 4;

/// Direction of ball travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Travelling toward indicator 8.
    TowardRight,
    /// Travelling toward indicator 1.
    TowardLeft,
}

impl Direction {
    /// Picks a serve direction from a seed: even serves right, odd serves left.
    ///
    /// The engine seeds this with the current clock tick.
    pub fn from_seed(seed: u32) -> Self {
        if seed % 2 == 0 {
            Direction::TowardRight
        } else {
            Direction::TowardLeft
        }
    }

    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::TowardRight => Direction::TowardLeft,
            Direction::TowardLeft => Direction::TowardRight,
        }
    }

    /// The boundary indicator the ball is heading for.
    pub fn far_end(self) -> u8 {
        match self {
            Direction::TowardRight => INDICATOR_COUNT,
            Direction::TowardLeft => 1,
        }
    }

    /// The button that returns the ball at [`far_end`](Self::far_end).
    pub fn returning_channel(self) -> ButtonChannel {
        match self {
            Direction::TowardRight => ButtonChannel::Right,
            Direction::TowardLeft => ButtonChannel::Left,
        }
    }

    /// Next ball position, or `None` if the ball leaves the bar.
    fn advance(self, position: u8) -> Option<u8> {
        let next = match self {
            Direction::TowardRight => position.checked_add(1)?,
            Direction::TowardLeft => position.checked_sub(1)?,
        };
        is_valid_index(next).then_some(next)
    }
}

/// The current state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// A new rally is about to be served.
    #[default]
    Start,
    /// The ball is in play.
    BallMoving(Direction),
    /// A point was just won; the score is about to be shown.
    PointScored,
    /// A player reached the winning score.
    GameOver,
}

/// Ball and score state owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatchState {
    /// Lit indicator, 1..=8 while the ball is in play.
    pub ball_position: u8,
    /// Duration of one ball tick. Shorter is faster.
    pub ball_speed: Millis,
    pub left_score: u8,
    pub right_score: u8,
}

impl MatchState {
    /// A fresh game: ball at the start position, no points scored.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ball_position: START_POSITION,
            ball_speed: config.initial_speed,
            left_score: 0,
            right_score: 0,
        }
    }
}

/// Two-player ping-pong on an eight-indicator bar.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `L` - Indicator bar implementation
/// * `B` - Raw button input implementation
/// * `T` - Time source implementation
/// * `D` - Blocking delay implementation
pub struct Game<'t, L: IndicatorBar, B: ButtonInput, T: TimeSource, D: Delay> {
    bar: L,
    buttons: DebouncedButtons<B>,
    time: &'t T,
    delay: D,
    timer: ElapsedTimer,
    state: GameState,
    match_state: MatchState,
    config: GameConfig,
}

impl<'t, L: IndicatorBar, B: ButtonInput, T: TimeSource, D: Delay> Game<'t, L, B, T, D> {
    /// Creates a game with the standard rules, in [`GameState::Start`].
    pub fn new(bar: L, buttons: B, time: &'t T, delay: D) -> Self {
        Self::build(bar, buttons, time, delay, GameConfig::DEFAULT)
    }

    /// Creates a game with custom rules.
    pub fn with_config(
        bar: L,
        buttons: B,
        time: &'t T,
        delay: D,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(bar, buttons, time, delay, config))
    }

    fn build(bar: L, buttons: B, time: &'t T, delay: D, config: GameConfig) -> Self {
        Self {
            bar,
            buttons: DebouncedButtons::with_window(buttons, config.debounce_window),
            time,
            delay,
            timer: ElapsedTimer::new(),
            state: GameState::Start,
            match_state: MatchState::new(&config),
            config,
        }
    }

    /// Turns the bar off and forgets all button history.
    pub fn init(&mut self) {
        self.bar.clear();
        self.buttons.reset();
    }

    /// Plays the power-on animation: three full flashes between short pauses.
    pub fn start_up(&mut self) {
        info!("led-pong starting, first to {}", self.config.winning_score);
        self.bar.clear();
        self.delay.delay(Millis(500));
        display::flash_all(&mut self.bar, &mut self.delay, 3, Millis(200), Millis(200));
        self.delay.delay(Millis(500));
    }

    /// Initializes the hardware state and plays games forever.
    pub fn run(&mut self) -> ! {
        self.init();
        self.start_up();
        loop {
            self.step();
        }
    }

    /// Executes the handler for the current state once and returns the new state.
    pub fn step(&mut self) -> GameState {
        let next = match self.state {
            GameState::Start => self.serve(),
            GameState::BallMoving(direction) => self.ball_tick(direction),
            GameState::PointScored => self.point_scored(),
            GameState::GameOver => self.game_over(),
        };

        if next != self.state {
            debug!("{:?} -> {:?}", self.state, next);
        }
        self.state = next;
        next
    }

    /// Places the engine in an arbitrary state.
    ///
    /// A `BallMoving` state with the ball off the bar is inconsistent; the next
    /// [`step`](Self::step) recovers by serving a new rally.
    pub fn resume_from(&mut self, state: GameState, match_state: MatchState) {
        self.state = state;
        self.match_state = match_state;
    }

    fn serve(&mut self) -> GameState {
        self.match_state.ball_position = START_POSITION;
        self.match_state.ball_speed = self.config.initial_speed;
        let direction = Direction::from_seed(self.time.now().ticks());
        GameState::BallMoving(direction)
    }

    fn ball_tick(&mut self, direction: Direction) -> GameState {
        let position = self.match_state.ball_position;
        if !is_valid_index(position) {
            warn!("ball at invalid position {}, restarting rally", position);
            return GameState::Start;
        }

        self.bar.show_only(position);
        self.timer.arm(self.time, self.match_state.ball_speed);

        while !self.timer.elapsed(self.time) {
            // Early or wrong-side presses carry no penalty.
            let Some(channel) = self.buttons.poll(self.time.now()) else {
                continue;
            };
            if channel == direction.returning_channel() && position == direction.far_end() {
                self.match_state.ball_speed = self
                    .match_state
                    .ball_speed
                    .saturating_sub(self.config.speed_decrease)
                    .max(self.config.min_speed);
                trace!("returned, tick now {}ms", self.match_state.ball_speed.as_millis());
                return GameState::BallMoving(direction.reversed());
            }
        }

        match direction.advance(position) {
            Some(next) => {
                self.match_state.ball_position = next;
                GameState::BallMoving(direction)
            }
            None => {
                self.award_point(direction);
                display::flash_all(&mut self.bar, &mut self.delay, 3, Millis(100), Millis(100));
                GameState::PointScored
            }
        }
    }

    /// The ball left the bar travelling `direction`; the other player scores.
    fn award_point(&mut self, direction: Direction) {
        let score = match direction {
            Direction::TowardRight => &mut self.match_state.left_score,
            Direction::TowardLeft => &mut self.match_state.right_score,
        };
        *score = score.saturating_add(1);
        info!(
            "point: left {} right {}",
            self.match_state.left_score,
            self.match_state.right_score
        );
    }

    fn point_scored(&mut self) -> GameState {
        let MatchState {
            left_score,
            right_score,
            ..
        } = self.match_state;

        display::show_score(
            &mut self.bar,
            &mut self.delay,
            right_score,
            left_score,
            self.config.score_display_time,
        );

        let winner = if left_score >= self.config.winning_score {
            ButtonChannel::Left
        } else if right_score >= self.config.winning_score {
            ButtonChannel::Right
        } else {
            return GameState::Start;
        };

        info!("{:?} player wins", winner);
        display::show_winner(
            &mut self.bar,
            &mut self.delay,
            winner,
            self.config.winner_display_time,
        );
        GameState::GameOver
    }

    fn game_over(&mut self) -> GameState {
        self.delay.delay(Millis(1000));
        display::show_score(
            &mut self.bar,
            &mut self.delay,
            self.match_state.right_score,
            self.match_state.left_score,
            self.config.final_score_display_time,
        );
        self.match_state.left_score = 0;
        self.match_state.right_score = 0;
        self.delay.delay(Millis(2000));
        display::flash_all(&mut self.bar, &mut self.delay, 2, Millis(300), Millis(300));
        GameState::Start
    }

    /// Returns the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the ball and score state.
    pub fn match_state(&self) -> MatchState {
        self.match_state
    }

    /// Returns the active rules.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns a reference to the indicator bar.
    pub fn bar(&self) -> &L {
        &self.bar
    }

    /// Returns a reference to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Consumes the game and returns the owned hardware.
    pub fn release(self) -> (L, B, D) {
        (self.bar, self.buttons.release(), self.delay)
    }
}
