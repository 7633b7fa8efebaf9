//! Chart renderer: clears a surface and redraws area, line and both axes.
//!
//! Rendering is always a full redraw. Surfaces never keep anything from the
//! previous pass, so switching symbols cannot leave stale artifacts behind.

use eframe::egui::Color32;
use strum_macros::{Display, EnumIter};

use crate::chart::scale::{ChartLayout, ChartScale};
use crate::chart::ticks::{price_ticks, time_ticks};
use crate::config::{MARKET, PLOT_CONFIG};
use crate::domain::CandlePoint;
use crate::utils::format::{format_day_month, format_price_tick, local_time};

/// A point in surface pixels.
pub type Px = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Anything the chart can be drawn onto.
pub trait Surface {
    /// Current pixel size of the surface's container. Queried on every render.
    fn size(&self) -> (f64, f64);

    /// Drop everything drawn so far.
    fn clear(&mut self);

    /// Fill the polygon between `top` and the horizontal line `baseline`
    /// with `color`, fading from `top_opacity` at the highest point to
    /// `bottom_opacity` at the baseline.
    fn fill_gradient_area(
        &mut self,
        top: &[Px],
        baseline: f64,
        color: Color32,
        top_opacity: f32,
        bottom_opacity: f32,
    );

    /// Stroke an open path without fill.
    fn stroke_polyline(&mut self, points: &[Px], color: Color32, width: f32);

    fn line(&mut self, from: Px, to: Px, color: Color32, width: f32);

    fn text(&mut self, at: Px, text: &str, anchor: TextAnchor, color: Color32);
}

/// Coarse container width bucket that drives time-axis density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ViewportClass {
    Narrow,
    Medium,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < PLOT_CONFIG.narrow_breakpoint as f64 {
            ViewportClass::Narrow
        } else if width < PLOT_CONFIG.medium_breakpoint as f64 {
            ViewportClass::Medium
        } else {
            ViewportClass::Wide
        }
    }

    pub fn time_ticks(&self) -> usize {
        match self {
            ViewportClass::Narrow => 4,
            ViewportClass::Medium => 6,
            ViewportClass::Wide => 8,
        }
    }
}

/// Colors the renderer needs from the current theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTheme {
    pub line: Color32,
    pub axis: Color32,
}

impl ChartTheme {
    pub const LIGHT: ChartTheme = ChartTheme {
        line: PLOT_CONFIG.line_color,
        axis: PLOT_CONFIG.axis_color,
    };

    pub const DARK: ChartTheme = ChartTheme {
        line: PLOT_CONFIG.line_color_dark,
        axis: PLOT_CONFIG.axis_color_dark,
    };

    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::DARK } else { Self::LIGHT }
    }
}

/// Draw `series` onto `surface` using precomputed `scale`.
///
/// Order: gradient area, price line, bottom time axis, left price axis.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    series: &[CandlePoint],
    layout: &ChartLayout,
    scale: &ChartScale,
    viewport: ViewportClass,
    theme: &ChartTheme,
) {
    surface.clear();
    if series.is_empty() {
        return;
    }

    let points: Vec<Px> = series
        .iter()
        .map(|p| layout.to_surface(scale.project(p)))
        .collect();
    let baseline = layout.to_surface((0.0, scale.height())).1;

    surface.fill_gradient_area(
        &points,
        baseline,
        theme.line,
        PLOT_CONFIG.area_top_opacity,
        PLOT_CONFIG.area_bottom_opacity,
    );
    surface.stroke_polyline(&points, theme.line, PLOT_CONFIG.line_width);

    draw_time_axis(surface, layout, scale, viewport, theme);
    draw_price_axis(surface, layout, scale, theme);
}

fn draw_time_axis<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &ChartLayout,
    scale: &ChartScale,
    viewport: ViewportClass,
    theme: &ChartTheme,
) {
    let tick = PLOT_CONFIG.tick_size as f64;
    let left = layout.to_surface((0.0, scale.height()));
    let right = layout.to_surface((scale.width(), scale.height()));
    surface.line(left, right, theme.axis, 1.0);

    let (t0, t1) = scale.time_domain();
    let offset = MARKET.offset();
    for t in time_ticks(t0, t1, viewport.time_ticks(), offset) {
        let Some(local) = local_time(t, offset) else {
            continue;
        };
        let (x, y) = layout.to_surface((scale.x(t as f64), scale.height()));
        surface.line((x, y), (x, y + tick), theme.axis, 1.0);
        surface.text(
            (x, y + tick + PLOT_CONFIG.label_font_size as f64 + 4.0),
            &format_day_month(&local),
            TextAnchor::Middle,
            theme.axis,
        );
    }
}

fn draw_price_axis<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &ChartLayout,
    scale: &ChartScale,
    theme: &ChartTheme,
) {
    let tick = PLOT_CONFIG.tick_size as f64;
    let top = layout.to_surface((0.0, 0.0));
    let bottom = layout.to_surface((0.0, scale.height()));
    surface.line(top, bottom, theme.axis, 1.0);

    let (p0, p1) = scale.price_domain();
    let (ticks, step) = price_ticks(p0, p1, PLOT_CONFIG.price_ticks);
    for value in ticks {
        let (x, y) = layout.to_surface((0.0, scale.y(value)));
        surface.line((x - tick, y), (x, y), theme.axis, 1.0);
        surface.text(
            (x - tick - 3.0, y + PLOT_CONFIG.label_font_size as f64 / 3.0),
            &format_price_tick(value, step),
            TextAnchor::End,
            theme.axis,
        );
    }
}

/// One full render pass: read the surface size, derive layout, viewport
/// class and scale, then redraw. Returns what the pointer resolver needs, or
/// `None` (and a cleared surface) for an empty series.
pub fn render_chart<S: Surface + ?Sized>(
    surface: &mut S,
    series: &[CandlePoint],
    theme: &ChartTheme,
) -> Option<(ChartLayout, ChartScale)> {
    let (width, height) = surface.size();
    let layout = ChartLayout::new(width, height);
    let Some(scale) = ChartScale::compute(series, layout.plot_width(), layout.plot_height()) else {
        surface.clear();
        return None;
    };
    let viewport = ViewportClass::from_width(width);
    render(surface, series, &layout, &scale, viewport, theme);
    Some((layout, scale))
}
