//! Exchange session configuration.

use chrono::{FixedOffset, NaiveTime, Offset, Utc};
use std::time::Duration;

pub struct MarketConfig {
    /// Exchange wall-clock offset from UTC in seconds (MSK, no DST)
    pub utc_offset_secs: i32,
    /// Local close time of the main session
    pub close_hour: u32,
    pub close_minute: u32,
    /// How often the footer countdown refreshes
    pub countdown_period: Duration,
}

pub const MARKET: MarketConfig = MarketConfig {
    utc_offset_secs: 3 * 3600,
    close_hour: 19,
    close_minute: 0,
    countdown_period: Duration::from_secs(60),
};

impl MarketConfig {
    /// Exchange offset. Falls back to UTC if the configured offset is out of range.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(|| Utc.fix())
    }

    pub fn close_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.close_hour, self.close_minute, 0).unwrap_or(NaiveTime::MIN)
    }
}
