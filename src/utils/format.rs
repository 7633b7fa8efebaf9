//! Display formatting for prices and exchange-local dates (ru-RU conventions).

use chrono::{DateTime, FixedOffset, TimeZone};

/// Currency marker appended to every price label.
pub const CURRENCY: &str = "₽";

/// ru-RU groups thousands with a no-break space.
const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Localized price: "1 234,56 ₽" (at most three fraction digits, trailing zeros trimmed).
pub fn format_price_rub(price: f64) -> String {
    format!("{} {}", format_number_ru(price), CURRENCY)
}

/// Localized number without currency, following `Number.toLocaleString('ru-RU')`.
pub fn format_number_ru(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + 4);
    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Axis label for a price tick: plain number with just enough decimals for `step`, then the currency.
pub fn format_price_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    format!("{:.*} {}", decimals, value, CURRENCY)
}

/// Convert epoch milliseconds to exchange-local time.
pub fn local_time(time_ms: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    offset.timestamp_millis_opt(time_ms).single()
}

/// "dd.mm" used on the time axis.
pub fn format_day_month(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%d.%m").to_string()
}

/// "dd.mm.yyyy" used in the tooltip header.
pub fn format_date(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%d.%m.%Y").to_string()
}

/// "HH:MM" used in the tooltip footer.
pub fn format_time_of_day(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%H:%M").to_string()
}
