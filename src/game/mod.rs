//! Headless game controller.
//!
//! `GameSession` owns everything the browser version kept in globals and the
//! DOM: the board, the selection, the countdown and the set counter. It does
//! no rendering and keeps no clock; callers drive `tick()`.

pub mod board;
pub mod session;
pub mod timer;

pub use board::Board;
pub use session::{GameSession, Phase, SelectionOutcome};
pub use timer::{Countdown, Tick};
