//! Static quote snapshots shown on the dashboard cards.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A display snapshot of one listed stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub company_name: String,
    pub current_price: Decimal,
    pub change: Decimal,
    /// Percent points, e.g. `1.41` for +1.41%.
    pub change_percent: Decimal,
    pub market_cap: u64,
    pub volume: u64,
    #[serde(rename = "high52Week")]
    pub high_52_week: Decimal,
    #[serde(rename = "low52Week")]
    pub low_52_week: Decimal,
}

impl StockQuote {
    /// `change >= 0`.
    #[must_use]
    pub fn is_gaining(&self) -> bool {
        self.change >= Decimal::ZERO
    }
}

/// Loads a universe of quotes from a JSON array file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_universe(path: &Path) -> crate::Result<Vec<StockQuote>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        crate::StockscopeError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    let quotes: Vec<StockQuote> = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.display(), count = quotes.len(), "Loaded quote universe");
    Ok(quotes)
}

#[allow(clippy::too_many_arguments)]
fn quote(
    symbol: &str,
    company_name: &str,
    current_price: i64,
    change: i64,
    change_percent: i64,
    market_cap: u64,
    volume: u64,
    high_52_week: i64,
    low_52_week: i64,
) -> StockQuote {
    // Prices and percents are given in hundredths.
    StockQuote {
        symbol: symbol.to_string(),
        company_name: company_name.to_string(),
        current_price: Decimal::new(current_price, 2),
        change: Decimal::new(change, 2),
        change_percent: Decimal::new(change_percent, 2),
        market_cap,
        volume,
        high_52_week: Decimal::new(high_52_week, 2),
        low_52_week: Decimal::new(low_52_week, 2),
    }
}

/// The built-in universe of popular tech stocks.
#[must_use]
pub fn popular_stocks() -> Vec<StockQuote> {
    vec![
        quote("AAPL", "Apple Inc.", 17375, 242, 141, 2_721_000_000_000, 58_869_600, 18294, 12417),
        quote("MSFT", "Microsoft Corporation", 40839, 270, 67, 3_036_000_000_000, 18_188_500, 42082, 30900),
        quote("GOOGL", "Alphabet Inc.", 17785, -33, -18, 2_217_000_000_000, 16_064_600, 18133, 12021),
        quote("AMZN", "Amazon.com Inc.", 18646, 107, 58, 1_939_000_000_000, 24_019_000, 18977, 11835),
        quote("TSLA", "Tesla Inc.", 17802, -146, -81, 567_100_000_000, 81_668_500, 27898, 13880),
        quote("NVDA", "NVIDIA Corporation", 88186, 1048, 120, 2_170_000_000_000, 29_742_700, 97385, 44353),
        quote("META", "Meta Platforms Inc.", 51141, 494, 97, 1_303_000_000_000, 11_802_700, 53149, 31392),
        quote("AMD", "Advanced Micro Devices Inc.", 17069, 323, 193, 275_700_000_000, 42_594_400, 22730, 9312),
    ]
}
