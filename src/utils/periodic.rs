//! A start/stop periodic timer driven by the UI frame loop.
//!
//! There is no background thread: the owner calls `poll` each frame and
//! asks the context to repaint after `time_until_next`. Stopping clears the
//! schedule, so nothing fires once the owning view is gone.

use std::time::Duration;

use crate::utils::app_time::AppInstant;

#[derive(Debug, Clone)]
pub struct Periodic {
    period: Duration,
    next_due: Option<AppInstant>,
}

impl Periodic {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Arm the timer. The first tick is due immediately.
    pub fn start(&mut self, now: AppInstant) {
        self.next_due = Some(now);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// True if a tick is due. Missed ticks collapse into one; the next tick is
    /// scheduled one period after `now`.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn time_until_next(&self, now: AppInstant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}
