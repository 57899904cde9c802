//! Card model: attribute domains, identities, and generation.
//!
//! ## Key Types
//!
//! - `Style`, `Shape`, `Color`, `Count`: the four attribute domains
//! - `CardAttributes`: one value per domain, ordered (Style, Shape, Color, Count)
//! - `CardIdentity`: duplicate-detection key, derived via `IdentityScheme`
//! - `Card`: attributes plus identity
//! - `CardGenerator`: samples cards not already on the board

pub mod attributes;
pub mod card;
pub mod generator;

pub use attributes::{Attribute, CardAttributes, Color, Count, Shape, Style, SEPARATOR};
pub use card::{Card, CardIdentity, IdentityScheme};
pub use generator::{CardGenerator, EASY_STYLE};
