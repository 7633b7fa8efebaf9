use eframe::egui::{Area, Frame, Id, Order, ScrollArea, TextEdit, Ui};

use crate::domain::SecurityRef;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    QueryChanged(String),
    Select(String),
    ToggleFavorite(String),
}

/// Search box with a suggestion dropdown
pub struct SearchPanel<'a> {
    query: &'a mut String,
    suggestions: &'a [SecurityRef],
    searching: bool,
    favorites: &'a [String],
}

impl<'a> SearchPanel<'a> {
    pub fn new(
        query: &'a mut String,
        suggestions: &'a [SecurityRef],
        searching: bool,
        favorites: &'a [String],
    ) -> Self {
        Self {
            query,
            suggestions,
            searching,
            favorites,
        }
    }

    fn render_suggestions(&self, ui: &mut Ui, events: &mut Vec<SearchEvent>) {
        if self.suggestions.is_empty() {
            if self.searching {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label_subdued(UI_TEXT.search_loading);
                });
            } else {
                ui.label_subdued(UI_TEXT.search_empty);
            }
            return;
        }

        ScrollArea::vertical()
            .max_height(240.0)
            .id_salt("search_suggestions")
            .show(ui, |ui| {
                for security in self.suggestions.iter().take(UI_CONFIG.max_suggestions) {
                    ui.horizontal(|ui| {
                        let is_favorite = self.favorites.contains(&security.symbol);
                        let hover = if is_favorite {
                            UI_TEXT.favorite_remove_tooltip
                        } else {
                            UI_TEXT.favorite_add_tooltip
                        };
                        if ui.favorite_star(is_favorite, hover) {
                            events.push(SearchEvent::ToggleFavorite(security.symbol.clone()));
                        }
                        if ui.selectable_label(false, security.to_string()).clicked() {
                            events.push(SearchEvent::Select(security.symbol.clone()));
                        }
                    });
                }
            });
    }
}

impl<'a> Panel for SearchPanel<'a> {
    type Event = SearchEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<SearchEvent> {
        let mut events = Vec::new();

        let response = ui.add(
            TextEdit::singleline(self.query)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(UI_CONFIG.search_box_width),
        );
        if response.changed() {
            events.push(SearchEvent::QueryChanged(self.query.clone()));
        }

        if self.query.trim().chars().count() >= UI_CONFIG.min_search_chars {
            Area::new(Id::new("search_dropdown"))
                .order(Order::Foreground)
                .fixed_pos(response.rect.left_bottom())
                .show(ui.ctx(), |ui| {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_width(UI_CONFIG.search_box_width);
                        self.render_suggestions(ui, &mut events);
                    });
                });
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            for event in &events {
                if !matches!(event, SearchEvent::QueryChanged(_)) {
                    log::info!("Search panel event: {:?}", event);
                }
            }
        }

        events
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesEvent {
    Select(String),
    Remove(String),
}

/// Favorites list: click selects, the star removes
pub struct FavoritesPanel<'a> {
    favorites: &'a [String],
    selected: Option<&'a str>,
}

impl<'a> FavoritesPanel<'a> {
    pub fn new(favorites: &'a [String], selected: Option<&'a str>) -> Self {
        Self {
            favorites,
            selected,
        }
    }
}

impl<'a> Panel for FavoritesPanel<'a> {
    type Event = FavoritesEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<FavoritesEvent> {
        let mut events = Vec::new();

        if self.favorites.is_empty() {
            ui.label_subdued(UI_TEXT.favorites_empty);
            return events;
        }

        for symbol in self.favorites {
            ui.horizontal(|ui| {
                let is_selected = self.selected == Some(symbol.as_str());
                if ui.selectable_label(is_selected, symbol.as_str()).clicked() {
                    events.push(FavoritesEvent::Select(symbol.clone()));
                }
                if ui.favorite_star(true, UI_TEXT.favorite_remove_tooltip) {
                    events.push(FavoritesEvent::Remove(symbol.clone()));
                }
            });
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && !events.is_empty() {
            log::info!("Favorites panel events: {:?}", events);
        }

        events
    }
}
