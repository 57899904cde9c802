//! # set-game
//!
//! Card generation and set validation for the Set matching card game.
//!
//! ## Rules
//!
//! Every card has a style, shape, color and count, each drawn from three
//! values. Three cards form a set when, for every attribute, the values are
//! all the same or all different.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: `rules` and `CardGenerator` keep no state between
//!    calls beyond the generator's RNG.
//!
//! 2. **Explicit Identities**: Duplicate detection works on a set of
//!    identity strings passed in by the caller, not on any rendering layer.
//!
//! 3. **Deterministic**: A seeded `GameRng` reproduces the same boards.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Attribute domains, card identities, generation
//! - `rules`: Set validation
//! - `game`: Board, countdown and session controller

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GameConfig, GameRng, GameRngState, Result, SetError,
};

pub use crate::cards::{
    Attribute, Card, CardAttributes, CardGenerator, CardIdentity, Color, Count,
    IdentityScheme, Shape, Style,
};

pub use crate::rules::{find_sets, is_set, is_set_of, third_card};

pub use crate::game::{Board, Countdown, GameSession, Phase, SelectionOutcome, Tick};
