//! Core types: RNG, configuration, errors.
//!
//! Nothing here knows about individual cards beyond the identity scheme
//! carried in `GameConfig`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Difficulty, GameConfig, DEFAULT_TIME_LIMIT_SECS};
pub use error::{Result, SetError};
pub use rng::{GameRng, GameRngState};
