use eframe::egui::{Context, Visuals};

use crate::models::MarketClock;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.window_fill = UI_CONFIG.colors.chart_card;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// "До закрытия биржи: 0ч 30м" or "Биржа закрыта".
pub fn countdown_text(clock: MarketClock) -> String {
    match clock {
        MarketClock::Open { hours, minutes } => format!(
            "{}: {}{} {}{}",
            UI_TEXT.countdown_prefix,
            hours,
            UI_TEXT.hours_suffix,
            minutes,
            UI_TEXT.minutes_suffix
        ),
        MarketClock::Closed => UI_TEXT.market_closed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MARKET;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn countdown_half_hour_before_close() {
        let now = FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 18, 30, 0)
            .unwrap();
        let clock = MarketClock::at(now, MARKET.close_time());
        assert_eq!(countdown_text(clock), "До закрытия биржи: 0ч 30м");
    }

    #[test]
    fn countdown_after_close() {
        assert_eq!(countdown_text(MarketClock::Closed), "Биржа закрыта");
    }
}
