//! Plot visualization configuration

use eframe::egui::Color32;

/// Space reserved around the plot area for the axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

pub struct PlotConfig {
    pub margins: Margins,
    /// Total chart height including margins (px)
    pub chart_height: f32,
    /// Price line color (theme primary)
    pub line_color: Color32,
    /// Price line color on dark backgrounds
    pub line_color_dark: Color32,
    pub axis_color: Color32,
    pub axis_color_dark: Color32,
    pub line_width: f32,
    /// Gradient opacity right under the line
    pub area_top_opacity: f32,
    /// Gradient opacity at the baseline
    pub area_bottom_opacity: f32,
    /// Multiplier applied to the lowest price for the bottom of the price domain
    pub price_floor_factor: f64,
    /// Multiplier applied to the highest price for the top of the price domain
    pub price_ceiling_factor: f64,
    /// Price range substituted when every price is zero
    pub price_epsilon: f64,
    /// Half-width of the time domain when all points share one timestamp (ms)
    pub time_epsilon_ms: i64,
    /// Number of ticks on the price axis
    pub price_ticks: usize,
    /// Length of axis tick marks
    pub tick_size: f32,
    pub label_font_size: f32,
    /// Container widths below these are Narrow / Medium (px)
    pub narrow_breakpoint: f32,
    pub medium_breakpoint: f32,
    /// Tooltip offset from the pointer
    pub tooltip_offset: (f32, f32),
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    margins: Margins {
        top: 20.0,
        right: 30.0,
        bottom: 60.0,
        left: 60.0,
    },
    chart_height: 400.0,
    line_color: Color32::from_rgb(0x19, 0x76, 0xd2), // Blue
    line_color_dark: Color32::from_rgb(0x90, 0xca, 0xf9), // Light blue
    axis_color: Color32::from_rgb(0x33, 0x33, 0x33),
    axis_color_dark: Color32::from_rgb(0xbb, 0xbb, 0xbb),
    line_width: 2.0,
    area_top_opacity: 0.2,
    area_bottom_opacity: 0.0,
    price_floor_factor: 0.99,
    price_ceiling_factor: 1.01,
    price_epsilon: 0.01,
    time_epsilon_ms: 60_000,
    price_ticks: 6,
    tick_size: 6.0,
    label_font_size: 10.0,
    narrow_breakpoint: 600.0,
    medium_breakpoint: 900.0,
    tooltip_offset: (10.0, -28.0),
};
