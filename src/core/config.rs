//! Game configuration types.
//!
//! A session is configured once at startup:
//! - `Difficulty`: board size and whether style is fixed
//! - `GameConfig`: difficulty, time limit, identity scheme, seed

use serde::{Deserialize, Serialize};

use super::error::{Result, SetError};
use crate::cards::IdentityScheme;

/// Difficulty level chosen from the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 9 cards, all solid.
    Easy,
    /// 12 cards, every attribute varies.
    #[default]
    Standard,
}

impl Difficulty {
    /// Number of cards on the board.
    #[must_use]
    pub const fn board_size(self) -> usize {
        match self {
            Difficulty::Easy => 9,
            Difficulty::Standard => 12,
        }
    }

    /// Whether generation fixes the style attribute.
    #[must_use]
    pub const fn is_easy(self) -> bool {
        matches!(self, Difficulty::Easy)
    }
}

/// Default countdown length in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 180;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub difficulty: Difficulty,

    /// Countdown length in seconds. Must be positive.
    pub time_limit_secs: u32,

    /// How card identities are derived for the uniqueness check.
    pub identity_scheme: IdentityScheme,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            identity_scheme: IdentityScheme::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults (standard, 3 minutes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    #[must_use]
    pub fn with_identity_scheme(mut self, scheme: IdentityScheme) -> Self {
        self.identity_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration can produce a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.time_limit_secs == 0 {
            return Err(SetError::InvalidConfig(
                "time limit must be at least 1 second".to_string(),
            ));
        }

        let board_size = self.difficulty.board_size();
        let identities = self.identity_scheme.domain_size(self.difficulty.is_easy());
        if board_size > identities {
            return Err(SetError::InvalidConfig(format!(
                "board of {} cards exceeds {} distinct identities",
                board_size, identities
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty() {
        assert_eq!(Difficulty::Easy.board_size(), 9);
        assert_eq!(Difficulty::Standard.board_size(), 12);
        assert!(Difficulty::Easy.is_easy());
        assert!(!Difficulty::Standard.is_easy());
        assert_eq!(Difficulty::default(), Difficulty::Standard);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_difficulty(Difficulty::Easy)
            .with_time_limit(60)
            .with_identity_scheme(IdentityScheme::Full)
            .with_seed(42);

        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.time_limit_secs, 60);
        assert_eq!(config.identity_scheme, IdentityScheme::Full);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.time_limit_secs, DEFAULT_TIME_LIMIT_SECS);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
        assert!(config.clone().with_difficulty(Difficulty::Easy).validate().is_ok());
    }

    #[test]
    fn test_zero_time_limit_rejected() {
        let config = GameConfig::new().with_time_limit(0);
        assert!(matches!(config.validate(), Err(SetError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_difficulty(Difficulty::Easy).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""difficulty":"easy""#));
        assert!(json.contains(r#""identity_scheme":"without_count""#));

        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
