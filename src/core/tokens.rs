//! Display tokens for slot values.

use serde::{Deserialize, Serialize};

/// Tokens by slot value.
pub const DEFAULT_TOKENS: &[&str] = &["0", "1"];

/// Coloured disks: dark for an empty slot, red for a peg.
pub const DISK_TOKENS: &[&str] = &["⚫", "🔴"];

/// Built-in token sets, selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSet {
    /// [`DEFAULT_TOKENS`]
    #[default]
    Default,
    /// [`DISK_TOKENS`]
    Disks,
}

impl TokenSet {
    #[must_use]
    pub const fn strings(self) -> &'static [&'static str] {
        match self {
            TokenSet::Default => DEFAULT_TOKENS,
            TokenSet::Disks => DISK_TOKENS,
        }
    }
}

impl std::str::FromStr for TokenSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(TokenSet::Default),
            "disks" => Ok(TokenSet::Disks),
            other => Err(format!("unknown token set '{other}' (expected 'default' or 'disks')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_set() {
        assert_eq!(TokenSet::Default.strings(), DEFAULT_TOKENS);
        assert_eq!(TokenSet::Disks.strings(), DISK_TOKENS);
        assert_eq!("disks".parse::<TokenSet>(), Ok(TokenSet::Disks));
        assert!("stars".parse::<TokenSet>().is_err());
    }

    #[test]
    fn test_token_set_serde() {
        assert_eq!(serde_json::to_string(&TokenSet::Disks).unwrap(), "\"disks\"");
        let set: TokenSet = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(set, TokenSet::Default);
    }
}
