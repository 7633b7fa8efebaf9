use eframe::egui;
use poll_promise::Promise;

use crate::engine::{
    AppError, CandleResponse, CommitOutcome, FetchTicket, spawn_candle_fetch, spawn_search,
};
use crate::ui::app::MoexChartApp;
use crate::ui::config::UI_CONFIG;
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl MoexChartApp {
    pub(super) fn start_candle_fetch(&mut self, ticket: FetchTicket) {
        match &self.source {
            Some(source) => {
                let promise = spawn_candle_fetch(source.clone(), ticket);
                self.candle_requests.push(promise);
            }
            None => {
                // No client: fail the request immediately instead of spinning forever.
                let detail = self.client_error.clone().unwrap_or_default();
                self.candle_requests.push(Promise::from_ready(CandleResponse {
                    ticket,
                    result: Err(AppError::General(detail)),
                }));
            }
        }
    }

    pub(super) fn poll_candle_requests(&mut self, ctx: &egui::Context) {
        let mut still_pending = Vec::with_capacity(self.candle_requests.len());
        for promise in self.candle_requests.drain(..) {
            match promise.try_take() {
                Ok(response) => {
                    let symbol = response.ticket.symbol.clone();
                    let outcome = self.controller.commit(response);

                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_state_transitions {
                        log::info!("Candles for {} committed: {:?}", symbol, outcome);
                    }
                    if outcome == CommitOutcome::Failed {
                        log::warn!("No chart for {}", symbol);
                    }
                }
                Err(promise) => still_pending.push(promise),
            }
        }
        self.candle_requests = still_pending;

        if !self.candle_requests.is_empty() {
            ctx.request_repaint();
        }
    }

    /// Queries of at least `min_search_chars` hit the gateway; shorter ones clear the list.
    pub(super) fn on_query_changed(&mut self, query: String) {
        let query = query.trim().to_string();
        if query.chars().count() < UI_CONFIG.min_search_chars {
            self.suggestions.clear();
            self.search_promise = None;
            return;
        }
        let Some(source) = &self.source else {
            self.suggestions.clear();
            return;
        };
        self.search_promise = Some(spawn_search(source.clone(), query));
    }

    pub(super) fn poll_search(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.search_promise.take() else {
            return;
        };
        match promise.try_take() {
            Ok(response) => {
                // The box may have moved on while this was in flight.
                if response.query == self.search_query.trim() {
                    self.suggestions = response.securities;
                } else {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Dropping stale search results for '{}'", response.query);
                    }
                }
            }
            Err(promise) => {
                self.search_promise = Some(promise);
                ctx.request_repaint();
            }
        }
    }

    pub(super) fn is_searching(&self) -> bool {
        self.search_promise.is_some()
    }

    pub(super) fn poll_countdown(&mut self, ctx: &egui::Context) {
        let now = now();
        self.countdown.poll(now);
        if let Some(wait) = self.countdown.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
