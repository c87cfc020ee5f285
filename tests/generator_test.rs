//! Mock series generator properties.

mod common;

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use rand::SeedableRng;
use rand::rngs::StdRng;

use stockscope::generator::{DEFAULT_DAYS, DEFAULT_HORIZON, generate_bars, generate_predictions};
use stockscope::models::{Bar, Direction};

use common::{monday, rng, wednesday};

fn weekday_of(bar: &Bar) -> Weekday {
    DateTime::from_timestamp_millis(bar.timestamp)
        .expect("timestamp in range")
        .weekday()
}

#[test]
fn test_bars_respect_wick_bounds() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        for bar in generate_bars("NVDA", DEFAULT_DAYS, wednesday(), &mut rng) {
            assert!(bar.low <= bar.open.min(bar.close), "{bar:?}");
            assert!(bar.high >= bar.open.max(bar.close), "{bar:?}");
            assert!(bar.low >= 0.0);
        }
    }
}

#[test]
fn test_bars_are_strictly_increasing_weekdays() {
    let bars = generate_bars("AAPL", DEFAULT_DAYS, monday(), &mut rng());

    assert!(!bars.is_empty());
    assert!(bars.len() <= DEFAULT_DAYS as usize);
    for pair in bars.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }
    for bar in &bars {
        assert!(!matches!(weekday_of(bar), Weekday::Sat | Weekday::Sun));
    }
}

#[test]
fn test_aapl_five_days_starts_at_base_price() {
    let bars = generate_bars("AAPL", 5, wednesday(), &mut StdRng::seed_from_u64(42));

    // Sat 2 Mar .. Wed 6 Mar: the weekend drops out.
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].open, 170.0);
    assert_eq!(bars.last().unwrap().timestamp, wednesday().timestamp_millis());
}

#[test]
fn test_unknown_symbol_starts_at_one_hundred() {
    let bars = generate_bars("NOPE", 10, wednesday(), &mut rng());
    assert_eq!(bars[0].open, 100.0);
}

#[test]
fn test_single_weekend_day_still_yields_a_bar() {
    let saturday = wednesday() + chrono::Duration::days(3);
    let bars = generate_bars("AMZN", 1, saturday, &mut rng());
    assert_eq!(bars.len(), 1);
    assert_eq!(weekday_of(&bars[0]), Weekday::Fri);
}

#[test]
fn test_predictions_match_horizon_and_confidence_range() {
    let mut rng = rng();
    let bars = generate_bars("MSFT", DEFAULT_DAYS, wednesday(), &mut rng);
    let last = bars.last().unwrap();

    let predictions = generate_predictions(&bars, DEFAULT_HORIZON, &mut rng);
    assert_eq!(predictions.len(), DEFAULT_HORIZON as usize);
    for p in &predictions {
        assert!((0.5..=0.9).contains(&p.confidence), "{p:?}");
        assert!(p.timestamp > last.timestamp);
        assert!(p.predicted_price >= 0.0);
    }
}

#[test]
fn test_predictions_stay_within_scaled_move() {
    let mut rng = rng();
    let bars = generate_bars("META", 30, wednesday(), &mut rng);
    let close = bars.last().unwrap().close;

    for (i, p) in generate_predictions(&bars, 7, &mut rng).iter().enumerate() {
        let max_move = 0.03 * (i + 1) as f64 / 2.0;
        assert!((p.predicted_price / close - 1.0).abs() <= max_move + 1e-12);
    }
}

#[test]
fn test_empty_bars_yield_no_predictions() {
    assert!(generate_predictions(&[], 7, &mut rng()).is_empty());
}

#[test]
fn test_zero_horizon_yields_no_predictions() {
    let mut rng = rng();
    let bars = generate_bars("AMD", 10, wednesday(), &mut rng);
    assert!(generate_predictions(&bars, 0, &mut rng).is_empty());
}

#[test]
fn test_predictions_cover_every_direction_eventually() {
    let mut rng = rng();
    let bars = generate_bars("TSLA", 10, wednesday(), &mut rng);
    let predictions = generate_predictions(&bars, 200, &mut rng);

    for direction in [Direction::Up, Direction::Down, Direction::Neutral] {
        assert!(predictions.iter().any(|p| p.direction == direction));
    }
}

#[test]
fn test_window_past_earliest_date_is_truncated() {
    let now = DateTime::<Utc>::MIN_UTC + Duration::days(10);
    let bars = generate_bars("AAPL", u32::MAX, now, &mut rng());

    assert!(!bars.is_empty());
    assert!(bars.len() <= 11);
    assert!(bars[0].timestamp >= DateTime::<Utc>::MIN_UTC.timestamp_millis());
    assert!(bars.last().unwrap().timestamp <= now.timestamp_millis());
    for pair in bars.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }
}

#[test]
fn test_prediction_timestamps_saturate_at_range_end() {
    let anchor = Bar {
        timestamp: i64::MAX - 1,
        open: 10.0,
        high: 11.0,
        low: 9.0,
        close: 10.0,
        volume: 1,
    };
    let predictions = generate_predictions(&[anchor], 3, &mut rng());

    assert_eq!(predictions.len(), 3);
    assert!(predictions.iter().all(|p| p.timestamp == i64::MAX));
}
