//! Time left until the main session closes.

use chrono::{DateTime, FixedOffset, NaiveTime};

use crate::config::MARKET;
use crate::utils::app_time::{AppInstant, exchange_now};
use crate::utils::periodic::Periodic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketClock {
    Open { hours: i64, minutes: i64 },
    Closed,
}

impl MarketClock {
    /// Closed only once `now` is strictly past today's `close` (exchange local
    /// time). Otherwise whole minutes remaining, rounded down.
    pub fn at(now: DateTime<FixedOffset>, close: NaiveTime) -> Self {
        let close_today = now.date_naive().and_time(close);
        let now_local = now.naive_local();
        if now_local > close_today {
            return MarketClock::Closed;
        }
        let minutes = (close_today - now_local).num_minutes();
        MarketClock::Open {
            hours: minutes / 60,
            minutes: minutes % 60,
        }
    }

    pub fn now() -> Self {
        Self::at(exchange_now(), MARKET.close_time())
    }
}

/// Footer countdown, refreshed on a fixed period while running.
#[derive(Debug, Clone)]
pub struct MarketCountdown {
    timer: Periodic,
    current: MarketClock,
}

impl MarketCountdown {
    pub fn new() -> Self {
        Self {
            timer: Periodic::new(MARKET.countdown_period),
            current: MarketClock::now(),
        }
    }

    pub fn start(&mut self, now: AppInstant) {
        self.timer.start(now);
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Recompute if a tick is due. Returns true when it did.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        self.poll_with(now, MarketClock::now)
    }

    fn poll_with(&mut self, now: AppInstant, clock: impl FnOnce() -> MarketClock) -> bool {
        if self.timer.poll(now) {
            self.current = clock();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> MarketClock {
        self.current
    }

    pub fn time_until_next(&self, now: AppInstant) -> Option<std::time::Duration> {
        self.timer.time_until_next(now)
    }
}

impl Default for MarketCountdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;
    use chrono::TimeZone;
    use std::time::Duration;

    fn msk(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, h, m, s)
            .unwrap()
    }

    fn close() -> NaiveTime {
        NaiveTime::from_hms_opt(19, 0, 0).unwrap()
    }

    #[test]
    fn half_hour_before_close() {
        assert_eq!(
            MarketClock::at(msk(18, 30, 0), close()),
            MarketClock::Open { hours: 0, minutes: 30 }
        );
    }

    #[test]
    fn minutes_round_down() {
        assert_eq!(
            MarketClock::at(msk(10, 15, 59), close()),
            MarketClock::Open { hours: 8, minutes: 44 }
        );
    }

    #[test]
    fn exactly_at_close_is_still_open() {
        assert_eq!(
            MarketClock::at(msk(19, 0, 0), close()),
            MarketClock::Open { hours: 0, minutes: 0 }
        );
    }

    #[test]
    fn after_close_is_closed() {
        assert_eq!(MarketClock::at(msk(19, 0, 1), close()), MarketClock::Closed);
        assert_eq!(MarketClock::at(msk(23, 59, 0), close()), MarketClock::Closed);
    }

    #[test]
    fn countdown_refreshes_once_per_period_until_stopped() {
        let t0 = now();
        let mut countdown = MarketCountdown::new();
        countdown.start(t0);

        assert!(countdown.poll_with(t0, || MarketClock::Closed));
        assert_eq!(countdown.current(), MarketClock::Closed);
        assert!(!countdown.poll_with(t0 + Duration::from_secs(10), || unreachable!()));

        countdown.stop();
        assert!(!countdown.is_running());
        assert!(!countdown.poll_with(t0 + Duration::from_secs(120), || unreachable!()));
    }
}
