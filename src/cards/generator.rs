//! Random card generation with board-wide uniqueness.
//!
//! Each attribute is sampled independently and uniformly. In easy mode the
//! style is fixed to solid. A tuple whose identity is already on the board is
//! thrown away and the whole tuple is sampled again.

use rustc_hash::FxHashSet;

use super::attributes::{Attribute, CardAttributes, Color, Count, Shape, Style};
use super::card::{Card, CardIdentity, IdentityScheme};
use crate::core::{GameRng, Result, SetError};

/// Style used for every card in easy mode.
pub const EASY_STYLE: Style = Style::Solid;

/// Generates unique cards from a seeded RNG.
#[derive(Clone, Debug)]
pub struct CardGenerator {
    rng: GameRng,
    scheme: IdentityScheme,
}

impl CardGenerator {
    #[must_use]
    pub fn new(rng: GameRng, scheme: IdentityScheme) -> Self {
        Self { rng, scheme }
    }

    /// Shorthand for a generator seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64, scheme: IdentityScheme) -> Self {
        Self::new(GameRng::new(seed), scheme)
    }

    #[must_use]
    pub fn scheme(&self) -> IdentityScheme {
        self.scheme
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Sample one tuple with no uniqueness check.
    pub fn random_attributes(&mut self, easy_mode: bool) -> CardAttributes {
        let style = if easy_mode {
            EASY_STYLE
        } else {
            self.rng.pick(&Style::DOMAIN)
        };

        CardAttributes {
            style,
            shape: self.rng.pick(&Shape::DOMAIN),
            color: self.rng.pick(&Color::DOMAIN),
            count: self.rng.pick(&Count::DOMAIN),
        }
    }

    /// Generate a tuple whose identity is not in `existing`.
    ///
    /// Fails with `DomainExhausted` when every identity the constrained
    /// domain can produce is already present, since sampling could never
    /// terminate.
    pub fn generate(
        &mut self,
        existing: &FxHashSet<CardIdentity>,
        easy_mode: bool,
    ) -> Result<CardAttributes> {
        let available = self.scheme.domain_size(easy_mode);
        let occupied = self.occupied_in_domain(existing, easy_mode);
        if occupied >= available {
            return Err(SetError::DomainExhausted { available, occupied });
        }

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let attributes = self.random_attributes(easy_mode);
            let identity = self.scheme.identity(&attributes);

            if !existing.contains(&identity) {
                tracing::trace!(%identity, attempts, "Generated card");
                return Ok(attributes);
            }
            tracing::trace!(%identity, "Identity already on board, resampling");
        }
    }

    /// Generate a complete card whose identity is not in `existing`.
    pub fn generate_card(
        &mut self,
        existing: &FxHashSet<CardIdentity>,
        easy_mode: bool,
    ) -> Result<Card> {
        let attributes = self.generate(existing, easy_mode)?;
        Ok(Card::new(attributes, self.scheme))
    }

    /// Count identities in `existing` that this generator could produce.
    ///
    /// Identities outside the constrained domain (e.g. non-solid cards in easy
    /// mode, or strings from another scheme) never collide and are ignored.
    fn occupied_in_domain(&self, existing: &FxHashSet<CardIdentity>, easy_mode: bool) -> usize {
        let mut reachable: FxHashSet<CardIdentity> = FxHashSet::default();
        for attributes in CardAttributes::all() {
            if easy_mode && attributes.style != EASY_STYLE {
                continue;
            }
            reachable.insert(self.scheme.identity(&attributes));
        }
        reachable.iter().filter(|id| existing.contains(*id)).count()
    }
}
