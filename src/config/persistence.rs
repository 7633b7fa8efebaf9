//! File persistence and serialization configuration

// App state persistence
/// Path for saving/loading application UI state (native only; the browser uses local storage)
pub const APP_STATE_PATH: &str = ".states.json";

/// Storage key for the last selected symbol
pub const SELECTED_SYMBOL_KEY: &str = "selectedStock";

/// Storage key for the favorites list
pub const FAVORITES_KEY: &str = "favoriteStocks";
