//! Set validation.
//!
//! Three cards form a set when, at every attribute position, the three
//! values are either all equal or all pairwise distinct. Positions are
//! independent and unweighted.

use crate::cards::CardAttributes;
use crate::core::{Result, SetError};

/// Number of cards in a set.
pub const SET_SIZE: usize = 3;

fn all_same_or_all_different(x: usize, y: usize, z: usize) -> bool {
    let same = x == y && y == z;
    let different = x != y && y != z && x != z;
    same || different
}

/// Check whether three cards form a set.
///
/// ```
/// use set_game::cards::CardAttributes;
/// use set_game::rules::is_set;
///
/// let a: CardAttributes = "solid-diamond-green-1".parse().unwrap();
/// let b: CardAttributes = "outline-oval-purple-2".parse().unwrap();
/// let c: CardAttributes = "striped-squiggle-red-3".parse().unwrap();
/// assert!(is_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_set(a: &CardAttributes, b: &CardAttributes, c: &CardAttributes) -> bool {
    let (a, b, c) = (a.indices(), b.indices(), c.indices());
    (0..CardAttributes::POSITIONS).all(|i| all_same_or_all_different(a[i], b[i], c[i]))
}

/// Slice form of [`is_set`] for callers holding a selection.
///
/// Anything other than exactly three cards is rejected.
pub fn is_set_of(cards: &[CardAttributes]) -> Result<bool> {
    match cards {
        [a, b, c] => Ok(is_set(a, b, c)),
        _ => Err(SetError::WrongSelectionSize(cards.len())),
    }
}

/// The unique card that completes a set with `a` and `b`.
///
/// Where `a` and `b` agree the third card shares the value; where they
/// differ it takes the remaining one.
#[must_use]
pub fn third_card(a: &CardAttributes, b: &CardAttributes) -> CardAttributes {
    let (a, b) = (a.indices(), b.indices());
    // indices are 0, 1, 2; the missing one is 3 - x - y
    CardAttributes::from_indices(std::array::from_fn(|i| {
        if a[i] == b[i] {
            a[i]
        } else {
            3 - a[i] - b[i]
        }
    }))
}

/// All index triples `i < j < k` of `cards` that form a set.
#[must_use]
pub fn find_sets(cards: &[CardAttributes]) -> Vec<[usize; SET_SIZE]> {
    let mut sets = Vec::new();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            for k in (j + 1)..cards.len() {
                if is_set(&cards[i], &cards[j], &cards[k]) {
                    sets.push([i, j, k]);
                }
            }
        }
    }
    sets
}
