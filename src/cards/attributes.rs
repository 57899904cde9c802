//! The four attribute domains and the card attribute tuple.
//!
//! Every card has one value from each domain:
//!
//! - `Style`: solid, outline, striped
//! - `Shape`: diamond, oval, squiggle
//! - `Color`: green, purple, red
//! - `Count`: 1, 2, 3
//!
//! `CardAttributes` orders them (Style, Shape, Color, Count). The order is
//! part of the card's identity string, so it must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SetError;

/// Separator used when joining attribute names into a card string.
pub const SEPARATOR: char = '-';

/// A value from one fixed, three-element attribute domain.
pub trait Attribute: Copy + Eq + fmt::Debug + 'static {
    /// Every value of the domain, in index order.
    const DOMAIN: [Self; 3];

    /// Position of this value within `DOMAIN`.
    fn index(self) -> usize;

    /// Lowercase name used in card strings and asset names.
    fn name(self) -> &'static str;

    /// Look up a value by its name.
    fn parse(name: &str) -> Option<Self> {
        Self::DOMAIN.into_iter().find(|v| v.name() == name)
    }
}

/// Fill pattern of the shapes on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Solid,
    Outline,
    Striped,
}

impl Attribute for Style {
    const DOMAIN: [Self; 3] = [Style::Solid, Style::Outline, Style::Striped];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Style::Solid => "solid",
            Style::Outline => "outline",
            Style::Striped => "striped",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Purple,
    Red,
}

impl Attribute for Color {
    const DOMAIN: [Self; 3] = [Color::Green, Color::Purple, Color::Red];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Diamond,
    Oval,
    Squiggle,
}

impl Attribute for Shape {
    const DOMAIN: [Self; 3] = [Shape::Diamond, Shape::Oval, Shape::Squiggle];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Oval => "oval",
            Shape::Squiggle => "squiggle",
        }
    }
}

/// Number of shapes drawn on a card.
///
/// Serializes as the plain integer 1, 2 or 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// Numeric value (1-3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }
}

impl Attribute for Count {
    const DOMAIN: [Self; 3] = [Count::One, Count::Two, Count::Three];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Count::One => "1",
            Count::Two => "2",
            Count::Three => "3",
        }
    }
}

impl From<Count> for u8 {
    fn from(count: Count) -> Self {
        count.value()
    }
}

impl TryFrom<u8> for Count {
    type Error = SetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Count::One),
            2 => Ok(Count::Two),
            3 => Ok(Count::Three),
            other => Err(SetError::UnknownAttribute(other.to_string())),
        }
    }
}

macro_rules! impl_attribute_text {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl FromStr for $ty {
                type Err = SetError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Attribute>::parse(s)
                        .ok_or_else(|| SetError::UnknownAttribute(s.to_string()))
                }
            }
        )*
    };
}

impl_attribute_text!(Style, Color, Shape, Count);

/// The attribute tuple of one card, ordered (Style, Shape, Color, Count).
///
/// ## Example
///
/// ```
/// use set_game::cards::{CardAttributes, Color, Count, Shape, Style};
///
/// let card: CardAttributes = "solid-diamond-green-1".parse().unwrap();
/// assert_eq!(card, CardAttributes::new(Style::Solid, Shape::Diamond, Color::Green, Count::One));
/// assert_eq!(card.to_string(), "solid-diamond-green-1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardAttributes {
    pub style: Style,
    pub shape: Shape,
    pub color: Color,
    pub count: Count,
}

impl CardAttributes {
    /// Number of attribute positions in a tuple.
    pub const POSITIONS: usize = 4;

    #[must_use]
    pub const fn new(style: Style, shape: Shape, color: Color, count: Count) -> Self {
        Self {
            style,
            shape,
            color,
            count,
        }
    }

    /// Domain indices of each position, in tuple order.
    #[must_use]
    pub fn indices(&self) -> [usize; Self::POSITIONS] {
        [
            self.style.index(),
            self.shape.index(),
            self.color.index(),
            self.count.index(),
        ]
    }

    /// Build a tuple back from domain indices (each 0-2).
    #[must_use]
    pub fn from_indices(indices: [usize; Self::POSITIONS]) -> Self {
        Self {
            style: Style::DOMAIN[indices[0]],
            shape: Shape::DOMAIN[indices[1]],
            color: Color::DOMAIN[indices[2]],
            count: Count::DOMAIN[indices[3]],
        }
    }

    /// Every one of the 81 possible tuples.
    pub fn all() -> impl Iterator<Item = CardAttributes> {
        Style::DOMAIN.into_iter().flat_map(|style| {
            Shape::DOMAIN.into_iter().flat_map(move |shape| {
                Color::DOMAIN.into_iter().flat_map(move |color| {
                    Count::DOMAIN
                        .into_iter()
                        .map(move |count| CardAttributes::new(style, shape, color, count))
                })
            })
        })
    }
}

impl fmt::Display for CardAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.style,
            self.shape,
            self.color,
            self.count,
            sep = SEPARATOR
        )
    }
}

impl FromStr for CardAttributes {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        let [style, shape, color, count] = parts[..] else {
            return Err(SetError::UnknownAttribute(s.to_string()));
        };

        Ok(Self {
            style: style.parse()?,
            shape: shape.parse()?,
            color: color.parse()?,
            count: count.parse()?,
        })
    }
}
