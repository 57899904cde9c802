//! Game session: board, selection, set count and countdown.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --start()--> Playing --tick() reaches 0--> Expired
//!   ^                  |                             |
//!   +------back()------+-------------back()----------+
//! ```
//!
//! Cells move between occupied and selected via `select()`. Selecting a
//! third cell evaluates the selection, clears it, and replaces the three
//! cards if they formed a set.

use smallvec::SmallVec;

use super::board::Board;
use super::timer::{Countdown, Tick};
use crate::cards::{CardAttributes, CardGenerator};
use crate::core::{GameConfig, GameRng, GameRngState, Result, SetError};
use crate::rules::{self, SET_SIZE};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Menu: no game in progress.
    #[default]
    Idle,
    /// Cards can be selected.
    Playing,
    /// Time ran out; the board is frozen.
    Expired,
}

/// What happened after a `select()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Fewer than three cells selected. `selected` is the new count.
    Pending { selected: usize },
    /// The three cells formed a set and now hold new cards.
    Set { positions: [usize; SET_SIZE] },
    /// The three cells did not form a set.
    NotSet { positions: [usize; SET_SIZE] },
}

impl SelectionOutcome {
    /// Banner shown on the evaluated cards, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SelectionOutcome::Pending { .. } => None,
            SelectionOutcome::Set { .. } => Some("SET!"),
            SelectionOutcome::NotSet { .. } => Some("Not a Set"),
        }
    }
}

/// A single player's game.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    generator: CardGenerator,
    board: Board,
    selection: SmallVec<[usize; SET_SIZE]>,
    countdown: Countdown,
    set_count: u32,
    phase: Phase,
    refresh_enabled: bool,
}

impl GameSession {
    /// Create an idle session. Fails if `config` is invalid.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let generator = CardGenerator::new(rng, config.identity_scheme);

        Ok(Self {
            config,
            generator,
            board: Board::new(),
            selection: SmallVec::new(),
            countdown: Countdown::new(),
            set_count: 0,
            phase: Phase::Idle,
            refresh_enabled: false,
        })
    }

    /// Start a new game: fresh board, zero sets, full countdown.
    pub fn start(&mut self) -> Result<()> {
        let board = self.deal()?;

        self.board = board;
        self.selection.clear();
        self.set_count = 0;
        self.countdown.start(self.config.time_limit_secs);
        self.refresh_enabled = true;
        self.phase = Phase::Playing;

        tracing::info!(
            difficulty = ?self.config.difficulty,
            time_limit = self.config.time_limit_secs,
            seed = self.generator.rng().seed(),
            "Game started"
        );
        Ok(())
    }

    /// Toggle selection of the card at `position`.
    pub fn select(&mut self, position: usize) -> Result<SelectionOutcome> {
        if self.phase != Phase::Playing {
            return Err(SetError::GameNotRunning);
        }
        let len = self.board.len();
        if position >= len {
            return Err(SetError::PositionOutOfRange { position, len });
        }

        if let Some(idx) = self.selection.iter().position(|&p| p == position) {
            self.selection.remove(idx);
        } else {
            self.selection.push(position);
        }

        let [a, b, c] = self.selection[..] else {
            return Ok(SelectionOutcome::Pending {
                selected: self.selection.len(),
            });
        };
        let positions = [a, b, c];
        self.selection.clear();

        let cards = positions
            .iter()
            .map(|&p| {
                self.board
                    .get(p)
                    .map(|card| card.attributes)
                    .ok_or(SetError::PositionOutOfRange { position: p, len })
            })
            .collect::<Result<SmallVec<[CardAttributes; SET_SIZE]>>>()?;

        if rules::is_set_of(&cards)? {
            self.board
                .replace(&positions, &mut self.generator, self.config.difficulty.is_easy())?;
            self.set_count += 1;
            tracing::debug!(?positions, set_count = self.set_count, "Set found");
            Ok(SelectionOutcome::Set { positions })
        } else {
            tracing::debug!(?positions, "Not a set");
            Ok(SelectionOutcome::NotSet { positions })
        }
    }

    /// Deal a new board without touching the countdown or set count.
    pub fn refresh(&mut self) -> Result<()> {
        if self.phase != Phase::Playing || !self.refresh_enabled {
            return Err(SetError::GameNotRunning);
        }

        self.board = self.deal()?;
        self.selection.clear();
        tracing::debug!(cards = self.board.len(), "Board refreshed");
        Ok(())
    }

    /// Advance the countdown one second, expiring the game at zero.
    pub fn tick(&mut self) -> Tick {
        let tick = self.countdown.tick();
        if tick == Tick::Expired {
            self.phase = Phase::Expired;
            self.refresh_enabled = false;
            self.selection.clear();
            tracing::info!(set_count = self.set_count, "Time up");
        }
        tick
    }

    /// Leave the game and return to the menu.
    pub fn back(&mut self) {
        self.countdown.reset();
        self.board.clear();
        self.selection.clear();
        self.refresh_enabled = false;
        self.phase = Phase::Idle;
        tracing::info!(set_count = self.set_count, "Game closed");
    }

    /// First set on the board, if there is one.
    #[must_use]
    pub fn hint(&self) -> Option<[usize; SET_SIZE]> {
        rules::find_sets(&self.board.attributes()).into_iter().next()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Currently selected positions, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[usize] {
        &self.selection
    }

    #[must_use]
    pub fn set_count(&self) -> u32 {
        self.set_count
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn refresh_enabled(&self) -> bool {
        self.refresh_enabled
    }

    /// RNG state, for reproducing the boards dealt from here on.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.generator.rng().state()
    }

    fn deal(&mut self) -> Result<Board> {
        Board::deal(
            &mut self.generator,
            self.config.difficulty.board_size(),
            self.config.difficulty.is_easy(),
        )
    }
}
