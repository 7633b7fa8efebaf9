//! View controller: selection -> fetch ticket -> committed view state.

use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::CandlePoint;
use crate::engine::messages::{CandleResponse, CommitOutcome, FetchTicket};
use crate::engine::state::{AppError, ViewState};

/// Owns the chart `ViewState`.
///
/// Every selection bumps a generation counter and hands out a ticket. A
/// response is only applied if its ticket is still the current one, so a
/// slow answer for an old symbol can never overwrite a newer selection.
#[derive(Debug, Default)]
pub struct ChartController {
    state: ViewState,
    current: Option<FetchTicket>,
    generation: u64,
}

impl ChartController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The selection worth restoring on the next start. A symbol rejected as
    /// an invalid ticker is shown but never remembered.
    pub fn remembered_symbol(&self) -> Option<&str> {
        self.state.symbol().filter(|s| validate_symbol(s).is_ok())
    }

    /// Change the selected symbol.
    ///
    /// `None` (or a blank symbol) returns to `Idle`. Any other symbol, including
    /// the one already shown, enters `Loading` and returns the ticket the
    /// caller must fetch for.
    pub fn select(&mut self, symbol: Option<String>) -> Option<FetchTicket> {
        self.generation += 1;
        self.current = None;

        let symbol = match symbol.map(|s| s.trim().to_uppercase()) {
            Some(s) if !s.is_empty() => s,
            _ => {
                self.transition(ViewState::Idle);
                return None;
            }
        };

        if let Err(e) = validate_symbol(&symbol) {
            self.transition(ViewState::Error {
                symbol,
                message: e.to_string(),
            });
            return None;
        }

        let ticket = FetchTicket {
            symbol: symbol.clone(),
            generation: self.generation,
        };
        self.current = Some(ticket.clone());
        self.transition(ViewState::Loading { symbol });
        Some(ticket)
    }

    /// Re-issue the request for whatever symbol is on screen. No-op when idle.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let symbol = self.state.symbol()?.to_string();
        self.select(Some(symbol))
    }

    /// Apply a finished fetch.
    pub fn commit(&mut self, response: CandleResponse) -> CommitOutcome {
        if self.current.as_ref() != Some(&response.ticket) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_state_transitions {
                log::info!(
                    "Discarding stale candles for {} (generation {})",
                    response.ticket.symbol,
                    response.ticket.generation
                );
            }
            return CommitOutcome::Stale;
        }
        self.current = None;
        let symbol = response.ticket.symbol;

        match response.result {
            Ok(series) if !series.is_empty() => {
                let points = series.len();
                let series: Arc<[CandlePoint]> = Arc::from(series);
                self.transition(ViewState::Ready { symbol, series });
                CommitOutcome::Ready { points }
            }
            Ok(_) => {
                self.transition(ViewState::Error {
                    symbol,
                    message: AppError::EmptySeries.to_string(),
                });
                CommitOutcome::Failed
            }
            Err(e) => {
                self.transition(ViewState::Error {
                    symbol,
                    message: e.to_string(),
                });
                CommitOutcome::Failed
            }
        }
    }

    fn transition(&mut self, next: ViewState) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_transitions {
            log::info!(
                "View state: {} -> {} ({})",
                self.state.mode(),
                next.mode(),
                next.symbol().unwrap_or("-")
            );
        }
        self.state = next;
    }
}

/// ISS tickers are short uppercase ASCII codes; anything else would end up in the URL path.
fn validate_symbol(symbol: &str) -> Result<(), AppError> {
    let ok = symbol.len() <= 32
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if ok {
        Ok(())
    } else {
        Err(AppError::InvalidSymbol(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::RenderMode;
    use chrono::{FixedOffset, TimeZone};

    fn points(n: usize) -> Vec<CandlePoint> {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        (0..n)
            .map(|i| {
                let ts = msk.with_ymd_and_hms(2024, 3, 1, 10, i as u32, 0).unwrap();
                CandlePoint::new(ts, 100.0 + i as f64)
            })
            .collect()
    }

    fn ok(ticket: &FetchTicket, n: usize) -> CandleResponse {
        CandleResponse {
            ticket: ticket.clone(),
            result: Ok(points(n)),
        }
    }

    #[test]
    fn select_none_goes_idle() {
        let mut controller = ChartController::new();
        controller.select(Some("SBER".into()));
        assert!(controller.select(None).is_none());
        assert_eq!(controller.state().mode(), RenderMode::Prompt);
        assert!(controller.current.is_none());
    }

    #[test]
    fn select_enters_loading_then_ready() {
        let mut controller = ChartController::new();
        let ticket = controller.select(Some("sber ".into())).unwrap();
        assert_eq!(ticket.symbol, "SBER");
        assert_eq!(controller.state().mode(), RenderMode::Spinner);

        assert_eq!(controller.commit(ok(&ticket, 3)), CommitOutcome::Ready { points: 3 });
        assert_eq!(controller.state().series().map(|s| s.len()), Some(3));
        assert_eq!(controller.state().symbol(), Some("SBER"));
    }

    #[test]
    fn empty_response_becomes_error_with_message() {
        let mut controller = ChartController::new();
        let ticket = controller.select(Some("SBER".into())).unwrap();

        assert_eq!(controller.commit(ok(&ticket, 0)), CommitOutcome::Failed);
        match controller.state() {
            ViewState::Error { symbol, message } => {
                assert_eq!(symbol, "SBER");
                assert!(!message.is_empty());
            }
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[test]
    fn late_response_for_previous_symbol_is_discarded() {
        let mut controller = ChartController::new();
        let ticket_a = controller.select(Some("AAA".into())).unwrap();
        let ticket_b = controller.select(Some("BBB".into())).unwrap();

        assert_eq!(controller.commit(ok(&ticket_b, 2)), CommitOutcome::Ready { points: 2 });
        assert_eq!(controller.commit(ok(&ticket_a, 5)), CommitOutcome::Stale);
        assert_eq!(controller.state().symbol(), Some("BBB"));
        assert_eq!(controller.state().series().map(|s| s.len()), Some(2));
    }

    #[test]
    fn reselecting_same_symbol_invalidates_older_request() {
        let mut controller = ChartController::new();
        let first = controller.select(Some("SBER".into())).unwrap();
        let second = controller.retry().unwrap();
        assert_ne!(first, second);

        assert_eq!(controller.commit(ok(&first, 1)), CommitOutcome::Stale);
        assert_eq!(controller.state().mode(), RenderMode::Spinner);
        assert_eq!(controller.commit(ok(&second, 1)), CommitOutcome::Ready { points: 1 });
    }

    #[test]
    fn response_after_deselect_is_stale() {
        let mut controller = ChartController::new();
        let ticket = controller.select(Some("SBER".into())).unwrap();
        controller.select(None);
        assert_eq!(controller.commit(ok(&ticket, 4)), CommitOutcome::Stale);
        assert_eq!(controller.state().mode(), RenderMode::Prompt);
    }

    #[test]
    fn invalid_symbol_errors_without_fetching() {
        let mut controller = ChartController::new();
        assert!(controller.select(Some("SB/ER".into())).is_none());
        assert_eq!(controller.state().mode(), RenderMode::ErrorMessage);
    }

    #[test]
    fn gateway_failure_is_shown() {
        let mut controller = ChartController::new();
        let ticket = controller.select(Some("SBER".into())).unwrap();
        let outcome = controller.commit(CandleResponse {
            ticket,
            result: Err(AppError::General("client unavailable".into())),
        });
        assert_eq!(outcome, CommitOutcome::Failed);
        assert_eq!(controller.state().mode(), RenderMode::ErrorMessage);
        assert_eq!(controller.state().symbol(), Some("SBER"));
        match controller.state() {
            ViewState::Error { message, .. } => {
                assert_eq!(message, "Ошибка при загрузке данных: client unavailable")
            }
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[test]
    fn rejected_ticker_is_not_remembered() {
        let mut controller = ChartController::new();
        controller.select(Some("SB/ER".into()));
        assert_eq!(controller.state().symbol(), Some("SB/ER"));
        assert_eq!(controller.remembered_symbol(), None);
    }

    #[test]
    fn loading_and_failed_symbols_are_remembered() {
        let mut controller = ChartController::new();
        let ticket = controller.select(Some("gazp".into())).unwrap();
        assert_eq!(controller.remembered_symbol(), Some("GAZP"));

        controller.commit(ok(&ticket, 0));
        assert_eq!(controller.remembered_symbol(), Some("GAZP"));

        controller.select(None);
        assert_eq!(controller.remembered_symbol(), None);
    }
}
