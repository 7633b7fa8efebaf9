//! Axis tick placement: "nice" price steps and calendar-aligned time steps.

use chrono::FixedOffset;

const MAX_TICKS: usize = 1000;

const MS_IN_MIN: i64 = 60_000;
const MS_IN_H: i64 = MS_IN_MIN * 60;
const MS_IN_D: i64 = MS_IN_H * 24;

/// Candidate time steps, finest first.
const TIME_STEPS: [i64; 16] = [
    MS_IN_MIN,      // 1 min
    MS_IN_MIN * 5,  // 5 min
    MS_IN_MIN * 10, // 10 min
    MS_IN_MIN * 15, // 15 min
    MS_IN_MIN * 30, // 30 min
    MS_IN_H,        // 1 hour
    MS_IN_H * 3,    // 3 hour
    MS_IN_H * 6,    // 6 hour
    MS_IN_H * 12,   // 12 hour
    MS_IN_D,        // 1 day
    MS_IN_D * 2,    // 2 day
    MS_IN_D * 7,    // 1 week
    MS_IN_D * 14,   // 2 week
    MS_IN_D * 30,   // ~1 month
    MS_IN_D * 91,   // ~3 month
    MS_IN_D * 365,  // ~1 year
];

/// A 1, 2 or 5 x 10^n step that splits `[lo, hi]` into roughly `count` intervals.
pub fn nice_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = (hi - lo).abs();
    if count == 0 || !span.is_finite() || span == 0.0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Multiples of `nice_step` inside `[lo, hi]`, ascending.
pub fn price_ticks(lo: f64, hi: f64, count: usize) -> (Vec<f64>, f64) {
    let step = nice_step(lo, hi, count);
    if step <= 0.0 {
        return (Vec::new(), step);
    }
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

    // Multiply integer indices rather than accumulating, so 0.1 steps stay clean.
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let ticks = (first..=last)
        .take(MAX_TICKS)
        .map(|i| i as f64 * step)
        .collect();
    (ticks, step)
}

/// The candidate step closest (on a log scale) to `span / count`.
pub fn time_step(t0: f64, t1: f64, count: usize) -> i64 {
    let span = (t1 - t0).abs();
    if count == 0 || span <= 0.0 {
        return TIME_STEPS[0];
    }
    let target = span / count as f64;
    TIME_STEPS
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = ((*a as f64) / target).ln().abs();
            let db = ((*b as f64) / target).ln().abs();
            da.total_cmp(&db)
        })
        .unwrap_or(TIME_STEPS[0])
}

/// Tick times (ms) inside `[t0, t1]`, aligned to multiples of the step in
/// exchange wall-clock time so day steps land on local midnight.
pub fn time_ticks(t0: f64, t1: f64, count: usize, offset: FixedOffset) -> Vec<i64> {
    let step = time_step(t0, t1, count);
    let shift = offset.local_minus_utc() as i64 * 1000;
    let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };

    let local_lo = lo as i64 + shift;
    let local_hi = hi as i64 + shift;
    let first = local_lo.div_euclid(step) + i64::from(local_lo.rem_euclid(step) != 0);
    let last = local_hi.div_euclid(step);

    (first..=last)
        .take(MAX_TICKS)
        .map(|i| i * step - shift)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn msk() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    #[test]
    fn nice_steps_are_1_2_5() {
        assert_eq!(nice_step(0.0, 10.0, 10), 1.0);
        assert_eq!(nice_step(0.0, 10.0, 5), 2.0);
        assert_eq!(nice_step(89.1, 111.1, 6), 5.0);
        assert_eq!(nice_step(0.0, 1.0, 6), 0.2);
    }

    #[test]
    fn price_ticks_stay_inside_domain() {
        let (ticks, step) = price_ticks(89.1, 111.1, 6);
        assert_eq!(step, 5.0);
        assert_eq!(ticks, vec![90.0, 95.0, 100.0, 105.0, 110.0]);
    }

    #[test]
    fn degenerate_domain_has_no_ticks() {
        assert!(price_ticks(5.0, 5.0, 6).0.is_empty());
    }

    #[test]
    fn twelve_hours_over_four_ticks_picks_three_hour_steps() {
        let t0 = msk().with_ymd_and_hms(2024, 3, 1, 7, 0, 0).unwrap();
        let t1 = msk().with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap();
        let ticks = time_ticks(
            t0.timestamp_millis() as f64,
            t1.timestamp_millis() as f64,
            4,
            msk(),
        );

        assert_eq!(ticks.len(), 4);
        for t in ticks {
            let local = msk().timestamp_millis_opt(t).unwrap();
            assert_eq!(local.hour() % 3, 0);
            assert_eq!(local.minute(), 0);
        }
    }

    #[test]
    fn day_ticks_land_on_local_midnight() {
        let t0 = msk().with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let t1 = msk().with_ymd_and_hms(2024, 3, 9, 18, 0, 0).unwrap();
        let ticks = time_ticks(
            t0.timestamp_millis() as f64,
            t1.timestamp_millis() as f64,
            8,
            msk(),
        );

        assert!(!ticks.is_empty());
        for t in &ticks {
            let local = msk().timestamp_millis_opt(*t).unwrap();
            assert_eq!((local.hour(), local.minute()), (0, 0));
        }
        assert!(ticks.iter().all(|t| *t >= t0.timestamp_millis() && *t <= t1.timestamp_millis()));
    }

    #[test]
    fn more_ticks_requested_means_finer_steps() {
        let t0 = 0.0;
        let t1 = (MS_IN_D * 3) as f64;
        assert!(time_step(t0, t1, 8) <= time_step(t0, t1, 4));
    }
}
