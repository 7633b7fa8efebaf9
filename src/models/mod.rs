// Models for state that lives outside the chart itself

pub mod market_clock;
pub mod preferences;

// Re-export key types for convenience
pub use market_clock::{MarketClock, MarketCountdown};
pub use preferences::{MemoryStore, PreferenceStore, Preferences};
