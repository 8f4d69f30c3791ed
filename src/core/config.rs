//! Board configuration.
//!
//! A `BoardConfig` says how big a starting board is, whether its empty
//! slot is drawn from a fixed seed, and which token set renders it. It
//! can be built in code or loaded from TOML:
//!
//! ```toml
//! size = 6
//! seed = 42
//! tokens = "disks"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use super::tokens::TokenSet;
use crate::error::ConfigError;

/// Side length of the standard board.
pub const DEFAULT_SIZE: usize = 6;

/// Configuration for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Side length of the square grid.
    pub size: usize,

    /// Fixed seed for the empty-slot draw. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Token set used when rendering.
    pub tokens: TokenSet,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            tokens: TokenSet::Default,
        }
    }
}

impl BoardConfig {
    /// Create a configuration for a `size`×`size` board.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one slot");

        Self {
            size,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Validation("size must be >= 1".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_tokens(mut self, tokens: TokenSet) -> Self {
        self.tokens = tokens;
        self
    }

    /// RNG for this configuration: seeded if a seed is set, from entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 6);
        assert_eq!(config.seed, None);
        assert_eq!(config.tokens, TokenSet::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(7).with_seed(3).with_tokens(TokenSet::Disks);
        assert_eq!(config.size, 7);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.tokens, TokenSet::Disks);
    }

    #[test]
    #[should_panic(expected = "Board must have at least one slot")]
    fn test_zero_size_panics() {
        BoardConfig::new(0);
    }

    #[test]
    fn test_from_toml() {
        let config = BoardConfig::from_toml("size = 8\nseed = 11\ntokens = \"disks\"\n").unwrap();
        assert_eq!(config, BoardConfig::new(8).with_seed(11).with_tokens(TokenSet::Disks));
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = BoardConfig::from_toml("seed = 5\n").unwrap();
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_from_toml_rejects_zero_size() {
        let err = BoardConfig::from_toml("size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = BoardConfig::from_toml("size = \"big\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BoardConfig::load(Path::new("/nonexistent/peg.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = BoardConfig::default().with_seed(9);
        assert_eq!(config.rng().seed(), 9);
    }
}
