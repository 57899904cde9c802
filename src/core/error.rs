//! Error type shared by every module.
//!
//! The card logic itself is total over well-formed input. Every variant
//! here is a caller contract violation surfaced as an invalid argument.

use thiserror::Error;

/// Errors raised by generation, validation and the game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// A set check was asked for something other than three cards.
    #[error("a set needs exactly 3 cards, got {0}")]
    WrongSelectionSize(usize),

    /// Every identity the generator could produce is already on the board.
    #[error("card domain exhausted: {occupied} of {available} identities already on the board")]
    DomainExhausted { available: usize, occupied: usize },

    /// An attribute name or card string did not parse.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("board position {position} out of range (board has {len} cards)")]
    PositionOutOfRange { position: usize, len: usize },

    /// Selection or refresh outside an active game.
    #[error("no game is running")]
    GameNotRunning,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SetError>;
