//! Brazilian Portuguese formatting for money and dates.

use chrono::{DateTime, Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Placeholder shown when a date is missing or unreadable.
pub const MISSING_DATE: &str = "—";

/// Whole centavos in `amount`, rounded half away from zero.
///
/// Figures and words on a receipt are both derived from this value.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn amount_in_cents(amount: f64) -> u64 {
    (amount.abs() * 100.0).round() as u64
}

/// Formats an amount as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// A non-breaking space separates the symbol from the figure.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let total_cents = amount_in_cents(amount);
    let reais = (total_cents / 100).to_string();
    let cents = total_cents % 100;

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, digit) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}R$\u{a0}{grouped},{cents:02}")
}

/// Long form used on printed receipts: `06 de janeiro de 2026`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Short form used in listings: `06/01/2026`.
#[must_use]
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a stored date string (`YYYY-MM-DD` or RFC 3339) in short form.
///
/// Returns [`MISSING_DATE`] when the value is absent or cannot be parsed.
#[must_use]
pub fn format_date_br(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return MISSING_DATE.to_string();
    };

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .map_or_else(|| MISSING_DATE.to_string(), format_short_date)
}
