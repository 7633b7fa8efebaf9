use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub header_panel: Color32,
    pub footer_panel: Color32,
    pub chart_card: Color32,
    pub favorite_star: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Queries shorter than this do not hit the gateway
    pub min_search_chars: usize,
    pub max_suggestions: usize,
    pub search_box_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(0x55, 0x55, 0x55),
        heading: Color32::from_rgb(0x21, 0x21, 0x21),
        subsection_heading: Color32::GRAY,
        central_panel: Color32::from_rgb(0xf8, 0xf9, 0xfa),
        header_panel: Color32::from_rgb(0x19, 0x76, 0xd2),
        footer_panel: Color32::from_rgb(0xf5, 0xf5, 0xf5),
        chart_card: Color32::WHITE,
        favorite_star: Color32::from_rgb(0xed, 0x6c, 0x02), // warning.main
        error: Color32::from_rgb(0xd3, 0x2f, 0x2f),
    },
    min_search_chars: 2,
    max_suggestions: 50,
    search_box_width: 320.0,
};
