//! Forward price prediction model.

use serde::{Deserialize, Serialize};

/// Per-step change above which a prediction counts as `Up` (0.5%).
pub const DIRECTION_THRESHOLD: f64 = 0.005;

/// Direction of a predicted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl Direction {
    /// Classifies a fractional change against the ±0.5% threshold.
    #[must_use]
    pub fn classify(change: f64) -> Self {
        if change > DIRECTION_THRESHOLD {
            Direction::Up
        } else if change < -DIRECTION_THRESHOLD {
            Direction::Down
        } else {
            Direction::Neutral
        }
    }

    /// Dashboard badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Bullish",
            Direction::Down => "Bearish",
            Direction::Neutral => "Neutral",
        }
    }
}

/// One synthesized future price point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Epoch milliseconds, always after the anchoring bar.
    pub timestamp: i64,
    pub predicted_price: f64,
    /// In `[0.5, 0.9]` for generated predictions.
    pub confidence: f64,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_strict_threshold() {
        assert_eq!(Direction::classify(0.006), Direction::Up);
        assert_eq!(Direction::classify(0.005), Direction::Neutral);
        assert_eq!(Direction::classify(0.0), Direction::Neutral);
        assert_eq!(Direction::classify(-0.005), Direction::Neutral);
        assert_eq!(Direction::classify(-0.0051), Direction::Down);
    }

    #[test]
    fn labels_read_as_market_terms() {
        assert_eq!(Direction::Up.label(), "Bullish");
        assert_eq!(Direction::Down.label(), "Bearish");
        assert_eq!(Direction::Neutral.label(), "Neutral");
    }

    #[test]
    fn serializes_camel_case_lowercase_direction() {
        let prediction = Prediction {
            timestamp: 86_400_000,
            predicted_price: 101.5,
            confidence: 0.75,
            direction: Direction::Up,
        };
        let json = serde_json::to_string(&prediction).unwrap();
        assert!(json.contains("\"predictedPrice\":101.5"));
        assert!(json.contains("\"direction\":\"up\""));
    }
}
