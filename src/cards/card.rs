//! Cards and their identity keys.
//!
//! A card's identity is the string used to detect duplicates on the board.
//! How much of the attribute tuple goes into it is controlled by
//! `IdentityScheme`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, CardAttributes, SEPARATOR};

/// Which attributes participate in a card's identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityScheme {
    /// `style-shape-color`. Count is dropped from the joined string, so two
    /// cards differing only in count collide.
    #[default]
    WithoutCount,
    /// `style-shape-color-count`. Every attribute is significant.
    Full,
}

impl IdentityScheme {
    /// Number of distinct identities this scheme can produce.
    ///
    /// With a fixed style (easy mode) the style position contributes one
    /// value instead of three.
    #[must_use]
    pub fn domain_size(self, style_fixed: bool) -> usize {
        let styles = if style_fixed { 1 } else { 3 };
        match self {
            IdentityScheme::WithoutCount => styles * 3 * 3,
            IdentityScheme::Full => styles * 3 * 3 * 3,
        }
    }

    /// Derive the identity of an attribute tuple under this scheme.
    #[must_use]
    pub fn identity(self, attributes: &CardAttributes) -> CardIdentity {
        let mut key = attributes.to_string();
        if self == IdentityScheme::WithoutCount {
            // drop "-N"
            key.truncate(key.len() - SEPARATOR.len_utf8() - attributes.count.name().len());
        }
        CardIdentity(key)
    }
}

/// Identity key of a card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIdentity(pub String);

impl CardIdentity {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardIdentity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card on the board: its attributes plus the derived identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub attributes: CardAttributes,
    pub identity: CardIdentity,
}

impl Card {
    /// Create a card, deriving its identity with `scheme`.
    #[must_use]
    pub fn new(attributes: CardAttributes, scheme: IdentityScheme) -> Self {
        Self {
            identity: scheme.identity(&attributes),
            attributes,
        }
    }
}
