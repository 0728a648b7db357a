//! Display formatting helpers shared across components.

use chrono::NaiveDate;

use kenya_commerce_core::{CurrencyCode, Price};

/// Format an amount in major units with the currency code prefix,
/// thousands grouping and two decimal places, e.g. `KES 1,234.50`.
#[must_use]
pub fn format_currency(amount: f64, currency: CurrencyCode) -> String {
    Price::from_major_units(amount, currency).map_or_else(
        || format!("{} {amount:.2}", currency.code()),
        |price| price.display(),
    )
}

/// Format an integer with thousands grouping, e.g. `1,234,567`.
#[must_use]
pub fn format_number(value: i64) -> String {
    let rendered = value.unsigned_abs().to_string();
    let len = rendered.len();
    let mut out = String::with_capacity(len + len / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in rendered.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format an ISO date (`2026-08-07` or RFC 3339) for display, e.g.
/// `7 August 2026`. Returns `None` when the input is not a recognizable date.
#[must_use]
pub fn format_date(value: &str) -> Option<String> {
    let date = chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%-d %B %Y").to_string())
}
