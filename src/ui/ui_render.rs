use eframe::egui::{
    Align, CentralPanel, Context, Frame, Layout, Margin, RichText, TopBottomPanel, Ui, Window,
};

use crate::engine::ViewState;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{FavoritesEvent, FavoritesPanel, Panel, SearchEvent, SearchPanel};
use crate::ui::utils::countdown_text;

use super::app::MoexChartApp;

impl MoexChartApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.header_panel)
            .inner_margin(Margin::symmetric(16, 10));
        TopBottomPanel::top("header_panel").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.app_title)
                        .heading()
                        .strong()
                        .color(UI_CONFIG.colors.chart_card),
                );
                ui.add_space(16.0);

                let searching = self.is_searching();
                let events = SearchPanel::new(
                    &mut self.search_query,
                    &self.suggestions,
                    searching,
                    &self.preferences.favorites,
                )
                .render(ui);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let label = format!(
                        "{} ({})",
                        UI_TEXT.favorites_button,
                        self.preferences.favorites.len()
                    );
                    if ui.button(label).clicked() {
                        self.show_favorites = !self.show_favorites;
                    }
                });

                for event in events {
                    match event {
                        SearchEvent::QueryChanged(query) => self.on_query_changed(query),
                        SearchEvent::Select(symbol) => {
                            self.search_query.clear();
                            self.suggestions.clear();
                            self.search_promise = None;
                            self.select_symbol(Some(symbol));
                        }
                        SearchEvent::ToggleFavorite(symbol) => self.toggle_favorite(&symbol),
                    }
                }
            });
        });
    }

    pub(super) fn render_favorites_window(&mut self, ctx: &Context) {
        let mut open = self.show_favorites;
        let mut events = Vec::new();
        let selected = self.controller.state().symbol().map(str::to_string);

        Window::new(UI_TEXT.favorites_title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                events = FavoritesPanel::new(&self.preferences.favorites, selected.as_deref())
                    .render(ui);
            });

        for event in events {
            match event {
                FavoritesEvent::Select(symbol) => {
                    open = false;
                    self.select_symbol(Some(symbol));
                }
                FavoritesEvent::Remove(symbol) => self.preferences.remove_favorite(&symbol),
            }
        }
        self.show_favorites = open;
    }

    pub(super) fn render_footer_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.footer_panel)
            .inner_margin(Margin::symmetric(16, 12));
        TopBottomPanel::bottom("footer_panel").frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label_subdued(countdown_text(self.countdown.current()));
            });
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));
        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let card = Frame::new()
                .fill(UI_CONFIG.colors.chart_card)
                .corner_radius(8)
                .inner_margin(Margin::same(16));
            card.show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                let mut retry = false;
                let mut clear = false;

                match self.controller.state() {
                    ViewState::Idle => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.label_subheader(UI_TEXT.select_prompt);
                            ui.add_space(40.0);
                        });
                    }
                    ViewState::Loading { symbol } => {
                        clear |= symbol_heading(ui, symbol);
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.spinner();
                            ui.add_space(40.0);
                        });
                    }
                    ViewState::Error { symbol, message } => {
                        clear |= symbol_heading(ui, symbol);
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.label_error(message.as_str());
                            if ui.button(UI_TEXT.retry_button).clicked() {
                                retry = true;
                            }
                            ui.add_space(20.0);
                        });
                    }
                    ViewState::Ready { symbol, series } => {
                        clear |= symbol_heading(ui, symbol);
                        ui.label_subdued(UI_TEXT.chart_subtitle);
                        ui.add_space(8.0);
                        self.chart_view.show(ui, series);
                    }
                }

                if clear {
                    self.select_symbol(None);
                } else if retry {
                    self.retry_selected();
                }
            });
        });
    }
}

/// Symbol title with a button that clears the selection. True when clicked.
fn symbol_heading(ui: &mut Ui, symbol: &str) -> bool {
    ui.horizontal(|ui| {
        ui.label_header(symbol);
        ui.small_button("✕")
            .on_hover_text(UI_TEXT.clear_selection)
            .clicked()
    })
    .inner
}
