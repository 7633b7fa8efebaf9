use std::fmt;
use std::sync::Arc;

use strum_macros::Display;

use crate::domain::CandlePoint;
use crate::ui::UI_TEXT;

/// Error types for chart operations. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The gateway returned no usable candles
    EmptySeries,
    /// The symbol cannot be requested (empty after trimming or bad characters)
    InvalidSymbol(String),
    /// Anything else, with a technical detail
    General(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptySeries => write!(f, "Нет данных для отображения"),
            AppError::InvalidSymbol(symbol) => write!(f, "Некорректный тикер: {}", symbol),
            AppError::General(msg) => write!(f, "{}: {}", UI_TEXT.load_error, msg),
        }
    }
}

impl std::error::Error for AppError {}

/// What the chart area shows. Owned by `ChartController`.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// Nothing selected
    #[default]
    Idle,
    Loading {
        symbol: String,
    },
    Error {
        symbol: String,
        message: String,
    },
    /// The series is shared with the renderer and pointer resolver; it is
    /// replaced wholesale, never edited.
    Ready {
        symbol: String,
        series: Arc<[CandlePoint]>,
    },
}

/// The single render mode each view state maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RenderMode {
    Prompt,
    Spinner,
    ErrorMessage,
    Chart,
}

impl ViewState {
    pub fn mode(&self) -> RenderMode {
        match self {
            ViewState::Idle => RenderMode::Prompt,
            ViewState::Loading { .. } => RenderMode::Spinner,
            ViewState::Error { .. } => RenderMode::ErrorMessage,
            ViewState::Ready { .. } => RenderMode::Chart,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            ViewState::Idle => None,
            ViewState::Loading { symbol }
            | ViewState::Error { symbol, .. }
            | ViewState::Ready { symbol, .. } => Some(symbol.as_str()),
        }
    }

    pub fn series(&self) -> Option<&Arc<[CandlePoint]>> {
        match self {
            ViewState::Ready { series, .. } => Some(series),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_one_render_mode() {
        let states = [
            ViewState::Idle,
            ViewState::Loading { symbol: "SBER".into() },
            ViewState::Error {
                symbol: "SBER".into(),
                message: "x".into(),
            },
            ViewState::Ready {
                symbol: "SBER".into(),
                series: Arc::from(Vec::new()),
            },
        ];
        let modes: Vec<RenderMode> = states.iter().map(ViewState::mode).collect();
        assert_eq!(
            modes,
            vec![
                RenderMode::Prompt,
                RenderMode::Spinner,
                RenderMode::ErrorMessage,
                RenderMode::Chart
            ]
        );
    }

    #[test]
    fn empty_series_message_is_localized() {
        assert_eq!(AppError::EmptySeries.to_string(), "Нет данных для отображения");
        assert!(AppError::InvalidSymbol("??".into()).to_string().contains("??"));
    }
}
