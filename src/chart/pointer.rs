//! Pointer position -> nearest data point, and the tooltip built from it.

use chrono::FixedOffset;

use crate::chart::scale::ChartScale;
use crate::config::PLOT_CONFIG;
use crate::domain::CandlePoint;
use crate::utils::format::{format_date, format_price_rub, format_time_of_day};

/// Index of the point closest in time to `time_ms`.
///
/// Lower-bound search, then the closer of the two neighbours. On an exact
/// tie the earlier point wins. Times outside the series clamp to the ends.
pub fn nearest_index(series: &[CandlePoint], time_ms: f64) -> Option<usize> {
    if series.is_empty() {
        return None;
    }
    let i = series.partition_point(|p| (p.time_ms() as f64) < time_ms);
    if i == 0 {
        return Some(0);
    }
    if i >= series.len() {
        return Some(series.len() - 1);
    }
    let before = time_ms - series[i - 1].time_ms() as f64;
    let after = series[i].time_ms() as f64 - time_ms;
    Some(if after < before { i } else { i - 1 })
}

/// The point nearest to plot-area x coordinate `plot_x`. `None` only for an empty series.
pub fn resolve<'a>(
    series: &'a [CandlePoint],
    scale: &ChartScale,
    plot_x: f64,
) -> Option<&'a CandlePoint> {
    nearest_index(series, scale.invert_x(plot_x)).map(|i| &series[i])
}

/// Tooltip content and placement for a hovered point.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub point: CandlePoint,
    /// dd.mm.yyyy
    pub date: String,
    /// "1 234,5 ₽"
    pub price: String,
    /// HH:MM
    pub time: String,
    /// Top-left corner, in the same coordinates as the pointer.
    pub anchor: (f64, f64),
}

impl Tooltip {
    pub fn for_point(point: &CandlePoint, pointer: (f64, f64), offset: FixedOffset) -> Self {
        let local = point.timestamp.with_timezone(&offset);
        let (dx, dy) = PLOT_CONFIG.tooltip_offset;
        Tooltip {
            point: *point,
            date: format_date(&local),
            price: format_price_rub(point.price),
            time: format_time_of_day(&local),
            anchor: (pointer.0 + dx as f64, pointer.1 + dy as f64),
        }
    }
}

/// Hover tracking for one chart surface.
#[derive(Debug, Default, Clone)]
pub struct TooltipState {
    current: Option<Tooltip>,
}

impl TooltipState {
    /// Feed the latest pointer position (`None` once it leaves the surface).
    pub fn update(
        &mut self,
        pointer: Option<(f64, f64)>,
        plot_x: impl Fn(f64) -> f64,
        series: &[CandlePoint],
        scale: &ChartScale,
        offset: FixedOffset,
    ) -> Option<&Tooltip> {
        self.current = pointer.and_then(|pos| {
            resolve(series, scale, plot_x(pos.0)).map(|p| Tooltip::for_point(p, pos, offset))
        });
        self.current.as_ref()
    }

    pub fn hide(&mut self) {
        self.current = None;
    }
}
