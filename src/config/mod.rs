//! Configuration module for the chart application.

pub mod market;
pub mod moex;

mod debug; // Private: files use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use market::MARKET;
pub use moex::{MOEX, MoexApiConfig};
pub use persistence::{APP_STATE_PATH, FAVORITES_KEY, SELECTED_SYMBOL_KEY};
pub use plot::PLOT_CONFIG;
