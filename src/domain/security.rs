use serde::{Deserialize, Serialize};
use std::fmt;

/// A listed security as shown in search results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecurityRef {
    /// Exchange ticker (unique), e.g. "SBER"
    pub symbol: String,
    /// Short display name, e.g. "Сбербанк"
    pub display_name: String,
}

impl SecurityRef {
    pub fn new(symbol: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
        }
    }

    /// Case-insensitive substring match against ticker and display name.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.symbol.to_lowercase().contains(needle)
            || self.display_name.to_lowercase().contains(needle)
    }
}

impl fmt::Display for SecurityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.symbol, self.display_name)
    }
}
