//! Mock series generator.
//!
//! Produces a random-walk sequence of daily OHLCV bars for a symbol and a
//! short run of synthesized predictions anchored on the last bar. Nothing
//! here reads an ambient clock or random source: callers inject both, so a
//! seeded [`rand::rngs::StdRng`] and a fixed `now` reproduce the same output.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use rand::Rng;
use tracing::debug;

use crate::models::{Bar, Direction, Prediction};

/// Default number of calendar days of history.
pub const DEFAULT_DAYS: u32 = 90;

/// Default number of prediction steps.
pub const DEFAULT_HORIZON: u32 = 7;

/// Base price used for symbols missing from [`BASE_PRICES`].
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

/// Full width of the daily close-to-open move (±1%).
const VOLATILITY: f64 = 0.02;

/// Maximum wick extension beyond the body, as a fraction of the open.
const WICK_FRACTION: f64 = 0.01;

const MIN_VOLUME: u64 = 5_000_000;
const MAX_VOLUME: u64 = 15_000_000;

/// Largest per-step predicted move (3%).
const MAX_STEP_CHANGE: f64 = 0.03;

const MIN_CONFIDENCE: f64 = 0.5;
const CONFIDENCE_SPREAD: f64 = 0.4;

const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Starting prices for the symbols the dashboard ships with.
pub const BASE_PRICES: &[(&str, f64)] = &[
    ("AAPL", 170.0),
    ("MSFT", 400.0),
    ("GOOGL", 175.0),
    ("AMZN", 185.0),
    ("TSLA", 180.0),
    ("NVDA", 875.0),
    ("META", 505.0),
    ("AMD", 165.0),
];

/// Returns the starting price for `symbol`, or [`DEFAULT_BASE_PRICE`].
#[must_use]
pub fn base_price(symbol: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map_or(DEFAULT_BASE_PRICE, |(_, p)| *p)
}

fn is_weekend(day: &DateTime<Utc>) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekdays among the `days` calendar days ending at `now`, oldest first.
///
/// A window made only of weekend days falls back to the most recent weekday
/// before it, so any `days >= 1` yields at least one trading day. Days before
/// the earliest representable date are dropped from the window.
fn trading_days(days: u32, now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let reachable = (now - DateTime::<Utc>::MIN_UTC).num_days();
    let window = i64::from(days).min(reachable + 1);

    let mut out: Vec<DateTime<Utc>> = (0..window)
        .rev()
        .filter_map(|offset| now.checked_sub_signed(Duration::days(offset)))
        .filter(|day| !is_weekend(day))
        .collect();

    if out.is_empty() && days > 0 {
        let mut day = Some(now);
        while let Some(candidate) = day.filter(is_weekend) {
            day = candidate.checked_sub_signed(Duration::days(1));
        }
        out.extend(day);
    }
    out
}

/// Generates daily bars for `symbol` over the `days` calendar days ending
/// at `now`, skipping Saturdays and Sundays.
///
/// Each bar opens at the previous close; the first opens at
/// [`base_price`]. The walk moves the close by up to ±1% of the open, widens
/// the wicks by up to 1% of the open on each side and draws a volume in
/// `[5_000_000, 15_000_000)`.
pub fn generate_bars<R: Rng + ?Sized>(
    symbol: &str,
    days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Bar> {
    let mut price = base_price(symbol);

    let bars: Vec<Bar> = trading_days(days, now)
        .into_iter()
        .map(|day| {
            let open = price;
            let change = rng.gen_range(-0.5_f64..0.5) * VOLATILITY;
            let close = open * (1.0 + change);
            let high = open.max(close) + rng.gen_range(0.0_f64..1.0) * open * WICK_FRACTION;
            let low = open.min(close) - rng.gen_range(0.0_f64..1.0) * open * WICK_FRACTION;
            let volume = rng.gen_range(MIN_VOLUME..MAX_VOLUME);

            price = close;
            Bar {
                timestamp: day.timestamp_millis(),
                open,
                high,
                low: low.max(0.0),
                close,
                volume,
            }
        })
        .collect();

    debug!(symbol, days, bars = bars.len(), "Generated mock bars");
    bars
}

/// Generates `horizon` daily predictions anchored on the last bar.
///
/// Each step draws an independent signed change of up to 3% and places the
/// prediction at `last_close * (1 + change * i / 2)`. The direction is
/// classified from that per-step change, not from the predicted price
/// relative to the anchor. Returns an empty vector for empty `bars`.
pub fn generate_predictions<R: Rng + ?Sized>(
    bars: &[Bar],
    horizon: u32,
    rng: &mut R,
) -> Vec<Prediction> {
    let Some(last) = bars.last() else {
        return Vec::new();
    };

    let predictions: Vec<Prediction> = (1..=horizon)
        .map(|i| {
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let change = rng.gen_range(0.0..MAX_STEP_CHANGE) * sign;
            let step = f64::from(i);
            let predicted_price = (last.close * (1.0 + change * step / 2.0)).max(0.0);
            let confidence = MIN_CONFIDENCE + rng.gen_range(0.0_f64..=1.0) * CONFIDENCE_SPREAD;

            Prediction {
                timestamp: last
                    .timestamp
                    .saturating_add(i64::from(i).saturating_mul(ONE_DAY_MS)),
                predicted_price,
                confidence,
                direction: Direction::classify(change),
            }
        })
        .collect();

    debug!(anchor = last.close, horizon, "Generated mock predictions");
    predictions
}
