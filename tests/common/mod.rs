//! Shared test utilities and fixtures.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

use stockscope::models::{Bar, StockQuote};

/// Seed used wherever a test only needs *some* reproducible series.
pub const SEED: u64 = 20_240_306;

/// Deterministic random source.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Wednesday 2024-03-06 15:30 UTC.
pub fn wednesday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 6, 15, 30, 0).unwrap()
}

/// Monday 2024-03-11 09:00 UTC.
pub fn monday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap()
}

pub fn bar(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar {
        timestamp,
        open,
        high,
        low,
        close,
        volume: 1_000_000,
    }
}

/// A quote where only the symbol and percent change matter.
pub fn mover(symbol: &str, change_percent: Decimal) -> StockQuote {
    StockQuote {
        symbol: symbol.to_string(),
        company_name: format!("{symbol} Corp"),
        current_price: Decimal::ONE_HUNDRED,
        change: change_percent,
        change_percent,
        market_cap: 1_000_000_000,
        volume: 10_000_000,
        high_52_week: Decimal::new(120, 0),
        low_52_week: Decimal::new(80, 0),
    }
}
