//! Top movers and symbol search over a universe of quotes.

use crate::models::StockQuote;

/// Default number of entries in each leaderboard column.
pub const DEFAULT_MOVERS: usize = 5;

/// Returns the `n` biggest gainers and `n` biggest losers by
/// `change_percent`.
///
/// Both lists come from independent stable sorts of `stocks`, so ties keep
/// their input order. A stock shows up in both lists only when `n` is large
/// enough to reach it from either end.
#[must_use]
pub fn top_movers(stocks: &[StockQuote], n: usize) -> (Vec<StockQuote>, Vec<StockQuote>) {
    let mut gainers = stocks.to_vec();
    gainers.sort_by(|a, b| b.change_percent.cmp(&a.change_percent));
    gainers.truncate(n);

    let mut losers = stocks.to_vec();
    losers.sort_by(|a, b| a.change_percent.cmp(&b.change_percent));
    losers.truncate(n);

    (gainers, losers)
}

/// Case-insensitive substring match on symbol or company name.
///
/// A blank term matches nothing. Results keep the input order.
#[must_use]
pub fn search<'a>(stocks: &'a [StockQuote], term: &str) -> Vec<&'a StockQuote> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    stocks
        .iter()
        .filter(|s| {
            s.symbol.to_lowercase().contains(&needle)
                || s.company_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Looks up a quote by symbol, ignoring case.
#[must_use]
pub fn find_symbol<'a>(stocks: &'a [StockQuote], symbol: &str) -> Option<&'a StockQuote> {
    stocks.iter().find(|s| s.symbol.eq_ignore_ascii_case(symbol))
}
