//! Insight cards derived from a quote and its prediction run.
//!
//! [`summarize`] folds a prediction sequence into the single direction,
//! sentiment and recommendation the insight card shows. [`QuoteStats`]
//! holds the 52-week range figures for the stats card.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::{Direction, Prediction, StockQuote};

/// Average confidence above which a call counts as strong.
const STRONG_CONFIDENCE: f64 = 0.7;

/// Average confidence above which the confidence meter shows medium.
const MEDIUM_CONFIDENCE: f64 = 0.4;

/// Daily volume above which trading counts as heavier than average.
const AVERAGE_VOLUME: u64 = 20_000_000;

/// Percent move above which the stock counts as more volatile than the market.
const MARKET_VOLATILITY_PCT: Decimal = Decimal::ONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Sentiment {
    StronglyBullish,
    ModeratelyBullish,
    Neutral,
    ModeratelyBearish,
    StronglyBearish,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StronglyBullish => "Strongly Bullish",
            Self::ModeratelyBullish => "Moderately Bullish",
            Self::Neutral => "Neutral",
            Self::ModeratelyBearish => "Moderately Bearish",
            Self::StronglyBearish => "Strongly Bearish",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    fn from_average(average: f64) -> Self {
        if average > STRONG_CONFIDENCE {
            Self::High
        } else if average > MEDIUM_CONFIDENCE {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Aggregate view of a prediction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    pub up: usize,
    pub down: usize,
    pub neutral: usize,
    /// Zero when there are no predictions.
    pub average_confidence: f64,
    pub overall: Direction,
    pub sentiment: Sentiment,
    pub recommendation: &'static str,
    pub confidence_level: ConfidenceLevel,
    /// Price of the furthest prediction.
    pub target_price: Option<f64>,
    pub target_above_current: bool,
    pub volume_above_average: bool,
    pub volatility_above_market: bool,
    /// More up than down calls.
    pub positive_mood: bool,
}

/// Summarizes `predictions` for `quote`.
#[must_use]
pub fn summarize(quote: &StockQuote, predictions: &[Prediction]) -> InsightSummary {
    let count = |d: Direction| predictions.iter().filter(|p| p.direction == d).count();
    let up = count(Direction::Up);
    let down = count(Direction::Down);
    let neutral = count(Direction::Neutral);

    let average_confidence = if predictions.is_empty() {
        0.0
    } else {
        predictions.iter().map(|p| p.confidence).sum::<f64>() / predictions.len() as f64
    };

    let overall = match up.cmp(&down) {
        std::cmp::Ordering::Greater => Direction::Up,
        std::cmp::Ordering::Less => Direction::Down,
        std::cmp::Ordering::Equal => Direction::Neutral,
    };
    let strong = average_confidence > STRONG_CONFIDENCE;

    let (sentiment, recommendation) = match (overall, strong) {
        (Direction::Up, true) => (Sentiment::StronglyBullish, "Consider buying or holding"),
        (Direction::Up, false) => (Sentiment::ModeratelyBullish, "Potential buying opportunity"),
        (Direction::Down, true) => (Sentiment::StronglyBearish, "Consider reducing position"),
        (Direction::Down, false) => (Sentiment::ModeratelyBearish, "Caution advised"),
        (Direction::Neutral, _) => (Sentiment::Neutral, "Monitor closely"),
    };

    let target_price = predictions.last().map(|p| p.predicted_price);
    let current = quote.current_price.to_f64().unwrap_or(0.0);

    InsightSummary {
        up,
        down,
        neutral,
        average_confidence,
        overall,
        sentiment,
        recommendation,
        confidence_level: ConfidenceLevel::from_average(average_confidence),
        target_price,
        target_above_current: target_price.is_some_and(|p| p > current),
        volume_above_average: quote.volume > AVERAGE_VOLUME,
        volatility_above_market: quote.change_percent > MARKET_VOLATILITY_PCT,
        positive_mood: up > down,
    }
}

/// Position of the current price inside its 52-week range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteStats {
    /// `(high - current) / high * 100`; `None` for a zero high.
    pub pct_below_high: Option<Decimal>,
    /// `(current - low) / low * 100`; `None` for a zero low.
    pub pct_above_low: Option<Decimal>,
    /// Within 10% of the 52-week high.
    pub near_high: bool,
    /// Within 10% above the 52-week low.
    pub near_low: bool,
}

impl QuoteStats {
    #[must_use]
    pub fn from_quote(quote: &StockQuote) -> Self {
        let hundred = Decimal::ONE_HUNDRED;
        let current = quote.current_price;
        let high = quote.high_52_week;
        let low = quote.low_52_week;

        let pct_below_high = (high - current)
            .checked_div(high)
            .map(|r| (r * hundred).round_dp(2));
        let pct_above_low = (current - low)
            .checked_div(low)
            .map(|r| (r * hundred).round_dp(2));

        let near_high = current
            .checked_div(high)
            .is_some_and(|r| r > Decimal::new(9, 1));
        let near_low = current
            .checked_div(low)
            .is_some_and(|r| r < Decimal::new(11, 1));

        Self {
            pct_below_high,
            pct_above_low,
            near_high,
            near_low,
        }
    }
}
