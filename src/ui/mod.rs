// User interface components
pub mod app;
mod app_async;
pub mod chart_painter;
pub mod config;
pub mod styles;
pub mod ui_panels;
mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::MoexChartApp;
pub use config::{UI_CONFIG, UI_TEXT};
