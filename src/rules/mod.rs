//! Game rules: deciding whether three cards form a set.
//!
//! All functions here are pure and stateless.

pub mod validator;

pub use validator::{find_sets, is_set, is_set_of, third_card, SET_SIZE};
