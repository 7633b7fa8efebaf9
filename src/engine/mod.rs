pub mod controller;
pub mod messages;
pub mod state;
pub mod worker;

// Re-export key components
pub use controller::ChartController;
pub use messages::{CandleResponse, CommitOutcome, FetchTicket, SearchResponse};
pub use state::{AppError, RenderMode, ViewState};
pub use worker::{load_candles, spawn_candle_fetch, spawn_search};
