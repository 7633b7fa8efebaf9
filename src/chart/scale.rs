//! Data space -> pixel space mapping for the price chart.

use argminmax::ArgMinMax;
use itertools::{Itertools, MinMaxResult};

use crate::config::PLOT_CONFIG;
use crate::config::plot::Margins;
use crate::domain::CandlePoint;

/// Pixel geometry of one render pass: the container size and the plot area inside the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: PLOT_CONFIG.margins,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margins.left as f64 - self.margins.right as f64).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margins.top as f64 - self.margins.bottom as f64).max(0.0)
    }

    /// Translate plot-area coordinates to surface coordinates.
    pub fn to_surface(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x + self.margins.left as f64, y + self.margins.top as f64)
    }

    /// Translate a surface x coordinate to the plot area.
    pub fn to_plot_x(&self, surface_x: f64) -> f64 {
        surface_x - self.margins.left as f64
    }
}

/// Linear time and price scales for one series on one plot area.
///
/// Time maps `[t_min, t_max]` onto `[0, width]`. Price maps the padded
/// domain onto `[height, 0]` so higher prices sit higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    time_domain: (f64, f64),
    price_domain: (f64, f64),
    width: f64,
    height: f64,
}

impl ChartScale {
    /// Build scales for `series` on a `width` x `height` plot area.
    /// Returns `None` for an empty series; that is a "no chart" render, not a scale.
    pub fn compute(series: &[CandlePoint], width: f64, height: f64) -> Option<Self> {
        let time_domain = match series.iter().map(CandlePoint::time_ms).minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(t) => widen_time(t, t),
            MinMaxResult::MinMax(lo, hi) => widen_time(lo, hi),
        };

        let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
        let (min_idx, max_idx) = prices.as_slice().argminmax();
        let price_domain = padded_price_domain(prices[min_idx], prices[max_idx]);

        Some(Self {
            time_domain,
            price_domain,
            width,
            height,
        })
    }

    pub fn time_domain(&self) -> (f64, f64) {
        self.time_domain
    }

    pub fn price_domain(&self) -> (f64, f64) {
        self.price_domain
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Time (ms since epoch) -> plot x.
    pub fn x(&self, time_ms: f64) -> f64 {
        let (t0, t1) = self.time_domain;
        (time_ms - t0) / (t1 - t0) * self.width
    }

    /// Price -> plot y.
    pub fn y(&self, price: f64) -> f64 {
        let (p0, p1) = self.price_domain;
        self.height - (price - p0) / (p1 - p0) * self.height
    }

    /// Plot x -> time (ms since epoch). Not clamped to the domain.
    pub fn invert_x(&self, x: f64) -> f64 {
        let (t0, t1) = self.time_domain;
        if self.width <= 0.0 {
            return t0;
        }
        t0 + x / self.width * (t1 - t0)
    }

    /// Plot y -> price. Not clamped to the domain.
    pub fn invert_y(&self, y: f64) -> f64 {
        let (p0, p1) = self.price_domain;
        if self.height <= 0.0 {
            return p0;
        }
        p0 + (self.height - y) / self.height * (p1 - p0)
    }

    /// Plot coordinates of a candle.
    pub fn project(&self, point: &CandlePoint) -> (f64, f64) {
        (self.x(point.time_ms() as f64), self.y(point.price))
    }
}

fn widen_time(lo: i64, hi: i64) -> (f64, f64) {
    if hi > lo {
        (lo as f64, hi as f64)
    } else {
        let eps = PLOT_CONFIG.time_epsilon_ms;
        ((lo - eps) as f64, (hi + eps) as f64)
    }
}

/// `[min * 0.99, max * 1.01]`, or `[min, min + epsilon]` when that range collapses (all-zero prices).
pub fn padded_price_domain(min: f64, max: f64) -> (f64, f64) {
    let lo = min * PLOT_CONFIG.price_floor_factor;
    let hi = max * PLOT_CONFIG.price_ceiling_factor;
    if hi > lo {
        (lo, hi)
    } else {
        (lo, lo + PLOT_CONFIG.price_epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn day(d: u32, price: f64) -> CandlePoint {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        CandlePoint::new(msk.with_ymd_and_hms(2024, 3, d, 10, 0, 0).unwrap(), price)
    }

    #[test]
    fn three_day_series_gets_padded_price_domain() {
        let series = vec![day(1, 100.0), day(2, 110.0), day(3, 90.0)];
        let scale = ChartScale::compute(&series, 300.0, 300.0).unwrap();

        let (lo, hi) = scale.price_domain();
        assert!(approx_eq(lo, 89.1));
        assert!(approx_eq(hi, 111.1));

        let (x, _) = scale.project(&series[1]);
        assert!(approx_eq(x, 150.0));
    }

    #[test]
    fn every_price_maps_inside_the_plot() {
        let series = vec![day(1, 100.0), day(2, 110.0), day(3, 90.0), day(4, 90.0)];
        let scale = ChartScale::compute(&series, 640.0, 320.0).unwrap();

        for point in &series {
            let (x, y) = scale.project(point);
            assert!((0.0..=640.0).contains(&x));
            assert!(y > 0.0 && y < 320.0, "y = {y} on the edge");
        }
    }

    #[test]
    fn higher_price_is_higher_on_screen() {
        let series = vec![day(1, 100.0), day(2, 110.0)];
        let scale = ChartScale::compute(&series, 300.0, 300.0).unwrap();
        assert!(scale.y(110.0) < scale.y(100.0));
    }

    #[test]
    fn inverses_round_trip() {
        let series = vec![day(1, 100.0), day(5, 120.0)];
        let scale = ChartScale::compute(&series, 400.0, 200.0).unwrap();
        let t = series[0].time_ms() as f64 + 3_600_000.0;
        assert!((scale.invert_x(scale.x(t)) - t).abs() < 1e-3);
        assert!(approx_eq(scale.invert_y(scale.y(105.0)), 105.0));
    }

    #[test]
    fn flat_nonzero_prices_keep_a_real_range() {
        let series = vec![day(1, 50.0), day(2, 50.0)];
        let scale = ChartScale::compute(&series, 300.0, 300.0).unwrap();
        let (lo, hi) = scale.price_domain();
        assert!(approx_eq(lo, 49.5));
        assert!(approx_eq(hi, 50.5));
        assert!(approx_eq(scale.y(50.0), 150.0));
    }

    #[test]
    fn all_zero_prices_use_epsilon_range() {
        let series = vec![day(1, 0.0), day(2, 0.0)];
        let scale = ChartScale::compute(&series, 300.0, 300.0).unwrap();
        let (lo, hi) = scale.price_domain();
        assert_eq!(lo, 0.0);
        assert!(hi > lo);
        assert!(scale.y(0.0).is_finite());
    }

    #[test]
    fn single_point_sits_mid_plot() {
        let series = vec![day(1, 10.0)];
        let scale = ChartScale::compute(&series, 300.0, 300.0).unwrap();
        let (x, y) = scale.project(&series[0]);
        assert!(approx_eq(x, 150.0));
        assert!(y.is_finite());
    }

    #[test]
    fn empty_series_has_no_scale() {
        assert!(ChartScale::compute(&[], 300.0, 300.0).is_none());
    }

    #[test]
    fn layout_subtracts_margins() {
        let layout = ChartLayout::new(800.0, 400.0);
        assert_eq!(layout.plot_width(), 710.0);
        assert_eq!(layout.plot_height(), 320.0);
        assert_eq!(layout.to_surface((0.0, 0.0)), (60.0, 20.0));
        assert_eq!(layout.to_plot_x(60.0), 0.0);
    }
}
