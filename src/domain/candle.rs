use chrono::{DateTime, FixedOffset};

/// A single close-price observation at the start of a candle bucket.
///
/// Timestamps carry the exchange offset so date/time labels render in
/// exchange wall-clock time regardless of where the app runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandlePoint {
    pub timestamp: DateTime<FixedOffset>,
    pub price: f64,
}

impl CandlePoint {
    pub fn new(timestamp: DateTime<FixedOffset>, price: f64) -> Self {
        CandlePoint { timestamp, price }
    }

    /// Milliseconds since the Unix epoch, the unit the time scale works in.
    pub fn time_ms(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}
