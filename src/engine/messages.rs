use crate::domain::{CandlePoint, SecurityRef};
use crate::engine::state::AppError;

/// Identifies one candle request. Only the response carrying the current
/// ticket may change the view; anything older is stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub symbol: String,
    pub generation: u64,
}

/// What a candle fetch hands back to the UI thread.
#[derive(Debug, Clone)]
pub struct CandleResponse {
    pub ticket: FetchTicket,
    pub result: Result<Vec<CandlePoint>, AppError>,
}

/// Result of a search, tagged with the query that produced it.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub query: String,
    pub securities: Vec<SecurityRef>,
}

/// What `ChartController::commit` did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Became the displayed series
    Ready { points: usize },
    /// Became the error view
    Failed,
    /// Superseded by a newer selection and dropped
    Stale,
}
