//! Display formatting for dashboard numbers, dates and prices.

use chrono::DateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::StockQuote;

const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Abbreviates large numbers with a one-decimal `K`/`M`/`B`/`T` suffix.
///
/// Values below one thousand are printed as-is.
#[must_use]
pub fn format_number(num: f64) -> String {
    SUFFIXES
        .iter()
        .find(|(scale, _)| num >= *scale)
        .map_or_else(
            || num.to_string(),
            |(scale, suffix)| format!("{:.1}{suffix}", num / scale),
        )
}

/// Formats epoch milliseconds as `Mar 5, 2024` (UTC).
///
/// Returns `None` when the timestamp is out of chrono's range.
#[must_use]
pub fn format_date(timestamp_ms: i64) -> Option<String> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|dt| dt.format("%b %-d, %Y").to_string())
}

/// `$173.75`
#[must_use]
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price.round_dp(2))
}

/// Signed change with its percent, e.g. `+2.42 (+1.41%)`.
#[must_use]
pub fn format_change(change: Decimal, change_percent: Decimal) -> String {
    format!(
        "{}{:.2} ({}{:.2}%)",
        sign(change),
        change.round_dp(2),
        sign(change_percent),
        change_percent.round_dp(2)
    )
}

/// Display strings for a quote card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCard {
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub market_cap: String,
    pub volume: String,
    pub range_52_week: String,
    pub gaining: bool,
}

impl QuoteCard {
    #[must_use]
    pub fn from_quote(quote: &StockQuote) -> Self {
        Self {
            symbol: quote.symbol.clone(),
            price: format_price(quote.current_price),
            change: format_change(quote.change, quote.change_percent),
            market_cap: format!("${}", format_number(quote.market_cap as f64)),
            volume: format_number(quote.volume as f64),
            range_52_week: format!(
                "{} - {}",
                format_price(quote.low_52_week),
                format_price(quote.high_52_week)
            ),
            gaining: quote.is_gaining(),
        }
    }
}

fn sign(value: Decimal) -> &'static str {
    if value.is_sign_positive() { "+" } else { "" }
}
