// Chart core: scales, ticks, rendering onto surfaces, pointer lookup
pub mod pointer;
pub mod render;
pub mod scale;
pub mod svg;
pub mod ticks;

// Re-export commonly used types
pub use pointer::{Tooltip, TooltipState, resolve};
pub use render::{ChartTheme, Surface, TextAnchor, ViewportClass, render, render_chart};
pub use scale::{ChartLayout, ChartScale};
pub use svg::SvgSurface;
