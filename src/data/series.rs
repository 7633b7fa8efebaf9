//! Raw candle rows -> chronological, future-filtered `CandlePoint` series.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::data::wire::RawCandle;
use crate::domain::CandlePoint;

const BEGIN_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse an ISS `begin` timestamp, which is exchange wall-clock time without an offset.
pub fn parse_begin(begin: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let naive = BEGIN_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(begin.trim(), fmt).ok())?;
    naive.and_local_timezone(offset).single()
}

/// Convert raw rows into an ascending series.
///
/// Rows are dropped when the timestamp does not parse, lies strictly after
/// `now`, or the price is not a finite non-negative number. The sort is
/// stable, so rows sharing a timestamp keep their relative order.
pub fn to_series(
    raw: Vec<RawCandle>,
    now: DateTime<FixedOffset>,
    offset: FixedOffset,
) -> Vec<CandlePoint> {
    let mut series: Vec<CandlePoint> = raw
        .into_iter()
        .filter_map(|row| {
            let Some(timestamp) = parse_begin(&row.begin, offset) else {
                log::warn!("Dropping candle with unparseable time '{}'", row.begin);
                return None;
            };
            if timestamp > now {
                return None;
            }
            if !row.close.is_finite() || row.close < 0.0 {
                log::warn!("Dropping candle at {} with price {}", row.begin, row.close);
                return None;
            }
            Some(CandlePoint::new(timestamp, row.close))
        })
        .collect();

    series.sort_by_key(CandlePoint::time_ms);
    series
}
