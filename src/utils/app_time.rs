// src/utils/app_time.rs

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::MARKET;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Wall-clock time on the exchange (MSK), whatever the host timezone.
pub fn exchange_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&MARKET.offset())
}
