use eframe::egui::{Color32, RichText, Ui};
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (captions, empty-list notes).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders an error message.
    fn label_error(&mut self, text: impl Into<String>);

    /// Star button for a favorite toggle. Returns true when clicked.
    fn favorite_star(&mut self, is_favorite: bool, hover: &str) -> bool;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }

    fn favorite_star(&mut self, is_favorite: bool, hover: &str) -> bool {
        let (glyph, color) = if is_favorite {
            ("★", UI_CONFIG.colors.favorite_star)
        } else {
            ("☆", Color32::GRAY)
        };
        self.small_button(RichText::new(glyph).color(color))
            .on_hover_text(hover)
            .clicked()
    }
}
