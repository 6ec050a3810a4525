//! Game configuration.
//!
//! The standard game is a 6×6 board, stacks of at most 5 pieces and a win
//! at 6 captures. `GameConfig` keeps these as data so variants and tests
//! can shrink or grow them without touching the rules.

use serde::{Deserialize, Serialize};

/// Standard board side length.
pub const DEFAULT_SIDE_LENGTH: usize = 6;

/// Standard maximum stack height before overflow.
pub const DEFAULT_MAX_STACK_HEIGHT: usize = 5;

/// Standard number of captures needed to win.
pub const DEFAULT_CAPTURES_TO_WIN: u32 = 6;

/// Largest board side length a game accepts.
pub const MAX_SIDE_LENGTH: usize = 256;

/// A configuration that does not describe a playable game.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("side_length must be at least 1")]
    EmptyBoard,

    #[error("side_length {0} exceeds the maximum of {max}", max = MAX_SIDE_LENGTH)]
    BoardTooLarge(usize),

    #[error("max_stack_height must be at least 1")]
    NoStackHeight,

    #[error("captures_to_win must be at least 1")]
    NoCaptureTarget,
}

/// Rule parameters for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board is `side_length × side_length`.
    pub side_length: usize,

    /// A tile taller than this loses its bottom piece.
    pub max_stack_height: usize,

    /// A player with at least this many captures has won.
    pub captures_to_win: u32,

    /// Reserves each player starts with (0 in the standard game).
    pub starting_reserves: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE_LENGTH,
            max_stack_height: DEFAULT_MAX_STACK_HEIGHT,
            captures_to_win: DEFAULT_CAPTURES_TO_WIN,
            starting_reserves: 0,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_side_length(mut self, side_length: usize) -> Self {
        self.side_length = side_length;
        self
    }

    #[must_use]
    pub fn with_max_stack_height(mut self, height: usize) -> Self {
        self.max_stack_height = height;
        self
    }

    #[must_use]
    pub fn with_captures_to_win(mut self, captures: u32) -> Self {
        self.captures_to_win = captures;
        self
    }

    #[must_use]
    pub fn with_starting_reserves(mut self, reserves: u32) -> Self {
        self.starting_reserves = reserves;
        self
    }

    /// Check the parameters describe a playable game.
    ///
    /// Reports the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side_length == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.side_length > MAX_SIDE_LENGTH {
            return Err(ConfigError::BoardTooLarge(self.side_length));
        }
        if self.max_stack_height == 0 {
            return Err(ConfigError::NoStackHeight);
        }
        if self.captures_to_win == 0 {
            return Err(ConfigError::NoCaptureTarget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.side_length, 6);
        assert_eq!(config.max_stack_height, 5);
        assert_eq!(config.captures_to_win, 6);
        assert_eq!(config.starting_reserves, 0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::default()
            .with_side_length(8)
            .with_max_stack_height(3)
            .with_captures_to_win(2)
            .with_starting_reserves(4);

        assert_eq!(config.side_length, 8);
        assert_eq!(config.max_stack_height, 3);
        assert_eq!(config.captures_to_win, 2);
        assert_eq!(config.starting_reserves, 4);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert_eq!(
            GameConfig::default().with_side_length(0).validate(),
            Err(ConfigError::EmptyBoard)
        );
        assert_eq!(
            GameConfig::default().with_max_stack_height(0).validate(),
            Err(ConfigError::NoStackHeight)
        );
        assert_eq!(
            GameConfig::default().with_captures_to_win(0).validate(),
            Err(ConfigError::NoCaptureTarget)
        );
    }

    #[test]
    fn test_validate_bounds_side_length() {
        let largest = GameConfig::default().with_side_length(MAX_SIDE_LENGTH);
        assert_eq!(largest.validate(), Ok(()));

        for side in [MAX_SIDE_LENGTH + 1, i32::MAX as usize, usize::MAX] {
            assert_eq!(
                GameConfig::default().with_side_length(side).validate(),
                Err(ConfigError::BoardTooLarge(side))
            );
        }
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_starting_reserves(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
