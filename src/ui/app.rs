use eframe::{Frame, egui};
use poll_promise::Promise;
use std::sync::Arc;

use crate::config::MoexApiConfig;
use crate::data::MoexClient;
use crate::domain::SecurityRef;
use crate::engine::{CandleResponse, ChartController, SearchResponse};
use crate::models::{MarketCountdown, Preferences};
use crate::ui::chart_painter::ChartView;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub struct MoexChartApp {
    /// `None` only if the HTTP client could not be built; selections then fail visibly.
    pub(super) source: Option<Arc<MoexClient>>,
    pub(super) client_error: Option<String>,

    pub(super) controller: ChartController,
    /// Every candle request still in flight. Stale ones drain here and are
    /// rejected by the controller.
    pub(super) candle_requests: Vec<Promise<CandleResponse>>,

    pub(super) search_query: String,
    pub(super) suggestions: Vec<SecurityRef>,
    pub(super) search_promise: Option<Promise<SearchResponse>>,

    pub(super) preferences: Preferences,
    pub(super) show_favorites: bool,
    pub(super) chart_view: ChartView,
    pub(super) countdown: MarketCountdown,
}

impl MoexChartApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        api_config: MoexApiConfig,
        initial_symbol: Option<String>,
    ) -> Self {
        let preferences = match cc.storage {
            Some(storage) => Preferences::load(storage),
            None => Preferences::default(),
        };

        let mut app = Self::with_preferences(api_config, preferences);

        // A symbol from the command line wins over the persisted one.
        let symbol = initial_symbol.or_else(|| app.preferences.selected_symbol.clone());
        if symbol.is_some() {
            app.select_symbol(symbol);
        }

        setup_custom_visuals(&cc.egui_ctx);
        app
    }

    pub(super) fn with_preferences(api_config: MoexApiConfig, preferences: Preferences) -> Self {
        let (source, client_error) = match MoexClient::new(api_config) {
            Ok(client) => (Some(Arc::new(client)), None),
            Err(e) => {
                log::error!("Failed to build ISS client: {:#}", e);
                (None, Some(e.to_string()))
            }
        };

        let mut countdown = MarketCountdown::new();
        countdown.start(now());

        Self {
            source,
            client_error,
            controller: ChartController::new(),
            candle_requests: Vec::new(),
            search_query: String::new(),
            suggestions: Vec::new(),
            search_promise: None,
            preferences,
            show_favorites: false,
            chart_view: ChartView::default(),
            countdown,
        }
    }

    /// Route every selection change through here so the controller, the
    /// persisted preference and the fetch stay in step.
    pub(super) fn select_symbol(&mut self, symbol: Option<String>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Symbol selected: {:?}", symbol);
        }

        let ticket = self.controller.select(symbol);
        self.preferences.selected_symbol = self.controller.remembered_symbol().map(str::to_string);
        if let Some(ticket) = ticket {
            self.start_candle_fetch(ticket);
        }
    }

    pub(super) fn retry_selected(&mut self) {
        if let Some(ticket) = self.controller.retry() {
            self.start_candle_fetch(ticket);
        }
    }

    pub(super) fn toggle_favorite(&mut self, symbol: &str) {
        let now_favorite = self.preferences.toggle_favorite(symbol);
        log::debug!("Favorite {} -> {}", symbol, now_favorite);
    }
}

impl eframe::App for MoexChartApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.countdown.stop();

        // Drop in-flight work so no callback outlives the app.
        self.candle_requests.clear();
        self.search_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Saving preferences: {:?}", self.preferences);
        }
        self.preferences.save(storage);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_candle_requests(ctx);
        self.poll_search(ctx);
        self.poll_countdown(ctx);

        self.render_header_panel(ctx);
        self.render_footer_panel(ctx);
        self.render_central_panel(ctx);
        if self.show_favorites {
            self.render_favorites_window(ctx);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::SELECTED_SYMBOL_KEY;
    use crate::engine::RenderMode;
    use crate::models::{MemoryStore, PreferenceStore};

    fn offline_app(preferences: Preferences) -> MoexChartApp {
        MoexChartApp::with_preferences(
            MoexApiConfig::with_base_url("http://127.0.0.1:1"),
            preferences,
        )
    }

    #[test]
    fn invalid_ticker_is_shown_but_not_persisted() {
        let mut app = offline_app(Preferences {
            selected_symbol: Some("SBER".into()),
            favorites: vec![],
        });

        app.select_symbol(Some("SB/ER".into()));

        assert_eq!(app.controller.state().mode(), RenderMode::ErrorMessage);
        assert!(app.candle_requests.is_empty());
        assert_eq!(app.preferences.selected_symbol, None);
    }

    #[tokio::test]
    async fn clearing_selection_returns_to_prompt_and_drops_the_key() {
        let mut store = MemoryStore::default();
        let mut app = offline_app(Preferences::default());

        app.select_symbol(Some("sber".into()));
        assert_eq!(app.controller.state().mode(), RenderMode::Spinner);
        app.preferences.save(&mut store);
        assert_eq!(store.load(SELECTED_SYMBOL_KEY).as_deref(), Some("SBER"));

        app.select_symbol(None);
        assert_eq!(app.controller.state().mode(), RenderMode::Prompt);
        app.preferences.save(&mut store);
        assert_eq!(store.load(SELECTED_SYMBOL_KEY), None);
    }
}
