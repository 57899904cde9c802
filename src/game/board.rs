//! The board: positional card slots plus the set of active identities.
//!
//! The identity set is what the generator checks against, so it must always
//! hold exactly the identities of the cards in the slots.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{Card, CardAttributes, CardGenerator, CardIdentity};
use crate::core::{Result, SetError};

/// Cards currently in play.
///
/// Slots are backed by `im::Vector`, so snapshots handed to a UI are cheap.
#[derive(Clone, Debug, Default)]
pub struct Board {
    cards: im::Vector<Card>,
    identities: FxHashSet<CardIdentity>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal a fresh board of `size` unique cards.
    pub fn deal(generator: &mut CardGenerator, size: usize, easy_mode: bool) -> Result<Self> {
        let mut board = Self::new();
        for _ in 0..size {
            let card = generator.generate_card(&board.identities, easy_mode)?;
            board.identities.insert(card.identity.clone());
            board.cards.push_back(card);
        }
        Ok(board)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a board position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Attribute tuples in position order.
    #[must_use]
    pub fn attributes(&self) -> Vec<CardAttributes> {
        self.cards.iter().map(|c| c.attributes).collect()
    }

    /// Identities of every card on the board.
    #[must_use]
    pub fn identities(&self) -> &FxHashSet<CardIdentity> {
        &self.identities
    }

    #[must_use]
    pub fn contains(&self, identity: &CardIdentity) -> bool {
        self.identities.contains(identity)
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.identities.clear();
    }

    /// Replace the cards at `positions` with newly generated ones.
    ///
    /// The outgoing identities are released before generating, so a full
    /// easy board can still be replenished. Either every position is
    /// replaced or the board is left untouched. Returns the removed cards.
    pub fn replace(
        &mut self,
        positions: &[usize],
        generator: &mut CardGenerator,
        easy_mode: bool,
    ) -> Result<Vec<Card>> {
        let mut positions: SmallVec<[usize; 3]> = positions.iter().copied().collect();
        positions.sort_unstable();
        positions.dedup();

        let len = self.cards.len();
        if let Some(&position) = positions.iter().find(|&&p| p >= len) {
            return Err(SetError::PositionOutOfRange { position, len });
        }

        let mut in_use = self.identities.clone();
        for &position in &positions {
            in_use.remove(&self.cards[position].identity);
        }

        let mut fresh: SmallVec<[Card; 3]> = SmallVec::new();
        for _ in 0..positions.len() {
            let card = generator.generate_card(&in_use, easy_mode)?;
            in_use.insert(card.identity.clone());
            fresh.push(card);
        }

        let removed = positions
            .iter()
            .zip(fresh)
            .map(|(&position, card)| self.cards.set(position, card))
            .collect();
        self.identities = in_use;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{IdentityScheme, Style};

    fn assert_consistent(board: &Board) {
        let ids: FxHashSet<_> = board.cards().map(|c| c.identity.clone()).collect();
        assert_eq!(ids.len(), board.len(), "duplicate identity on board");
        assert_eq!(&ids, board.identities());
    }

    #[test]
    fn test_deal_standard() {
        let mut gen = CardGenerator::seeded(42, IdentityScheme::WithoutCount);
        let board = Board::deal(&mut gen, 12, false).unwrap();

        assert_eq!(board.len(), 12);
        assert_consistent(&board);
    }

    #[test]
    fn test_deal_full_easy_board() {
        let mut gen = CardGenerator::seeded(8, IdentityScheme::WithoutCount);
        let board = Board::deal(&mut gen, 9, true).unwrap();

        assert_eq!(board.len(), 9);
        assert!(board.cards().all(|c| c.attributes.style == Style::Solid));
        assert_consistent(&board);
    }

    #[test]
    fn test_deal_too_many() {
        let mut gen = CardGenerator::seeded(8, IdentityScheme::WithoutCount);
        assert!(matches!(
            Board::deal(&mut gen, 10, true),
            Err(SetError::DomainExhausted { available: 9, .. })
        ));
    }

    #[test]
    fn test_replace_on_full_easy_board() {
        let mut gen = CardGenerator::seeded(11, IdentityScheme::WithoutCount);
        let mut board = Board::deal(&mut gen, 9, true).unwrap();
        let before: Vec<_> = board.cards().cloned().collect();

        let removed = board.replace(&[0, 4, 8], &mut gen, true).unwrap();

        assert_eq!(removed, vec![before[0].clone(), before[4].clone(), before[8].clone()]);
        assert_eq!(board.len(), 9);
        assert_consistent(&board);

        // untouched slots keep their cards
        for position in [1, 2, 3, 5, 6, 7] {
            assert_eq!(board.get(position), Some(&before[position]));
        }
    }

    #[test]
    fn test_replace_out_of_range_leaves_board() {
        let mut gen = CardGenerator::seeded(11, IdentityScheme::Full);
        let mut board = Board::deal(&mut gen, 12, false).unwrap();
        let before = board.attributes();

        assert_eq!(
            board.replace(&[1, 12], &mut gen, false),
            Err(SetError::PositionOutOfRange { position: 12, len: 12 })
        );
        assert_eq!(board.attributes(), before);
    }

    #[test]
    fn test_clear() {
        let mut gen = CardGenerator::seeded(1, IdentityScheme::WithoutCount);
        let mut board = Board::deal(&mut gen, 12, false).unwrap();
        board.clear();

        assert!(board.is_empty());
        assert!(board.identities().is_empty());
    }
}
