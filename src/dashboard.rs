//! Display-cycle bookkeeping for symbol selection.
//!
//! Each symbol selection starts a new cycle. Cycles are computed
//! independently and may finish out of order when the host overlaps them;
//! [`Dashboard::publish`] only accepts the most recently started one so a
//! stale result never replaces a newer selection.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::chart::{Primitive, Viewport, map_to_pixels};
use crate::generator::{DEFAULT_DAYS, DEFAULT_HORIZON, generate_bars, generate_predictions};
use crate::models::{Bar, Prediction};

/// Handle for one started display cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleToken {
    id: u64,
    symbol: String,
}

impl CycleToken {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Everything the chart view shows for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCycle {
    #[serde(skip)]
    pub id: u64,
    pub symbol: String,
    pub bars: Vec<Bar>,
    pub predictions: Vec<Prediction>,
    pub primitives: Vec<Primitive>,
}

/// Owns the injected random source and the currently displayed cycle.
pub struct Dashboard<R> {
    rng: R,
    viewport: Viewport,
    days: u32,
    horizon: u32,
    next_id: u64,
    latest: Option<u64>,
    current: Option<DisplayCycle>,
}

impl<R: Rng> Dashboard<R> {
    /// Creates a dashboard with the default 90-day history and 7-step horizon.
    #[must_use]
    pub fn new(rng: R, viewport: Viewport) -> Self {
        Self {
            rng,
            viewport,
            days: DEFAULT_DAYS,
            horizon: DEFAULT_HORIZON,
            next_id: 1,
            latest: None,
            current: None,
        }
    }

    #[must_use]
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    #[must_use]
    pub fn with_horizon(mut self, horizon: u32) -> Self {
        self.horizon = horizon;
        self
    }

    /// Starts a cycle for `symbol`. Any cycle started earlier becomes stale.
    pub fn select(&mut self, symbol: &str) -> CycleToken {
        let id = self.next_id;
        self.next_id += 1;
        self.latest = Some(id);
        CycleToken {
            id,
            symbol: symbol.to_string(),
        }
    }

    /// Regenerates bars, predictions and primitives for the token's symbol.
    pub fn compute(&mut self, token: &CycleToken, now: DateTime<Utc>) -> DisplayCycle {
        let bars = generate_bars(&token.symbol, self.days, now, &mut self.rng);
        let predictions = generate_predictions(&bars, self.horizon, &mut self.rng);
        let primitives = map_to_pixels(&bars, &predictions, self.viewport);
        DisplayCycle {
            id: token.id,
            symbol: token.symbol.clone(),
            bars,
            predictions,
            primitives,
        }
    }

    /// Displays `cycle` if it belongs to the latest selection.
    ///
    /// Returns `false` and drops the cycle when a newer selection has started.
    pub fn publish(&mut self, cycle: DisplayCycle) -> bool {
        if self.latest != Some(cycle.id) {
            warn!(
                cycle = cycle.id,
                latest = ?self.latest,
                symbol = %cycle.symbol,
                "Discarding stale display cycle"
            );
            return false;
        }
        self.accept(cycle);
        true
    }

    /// Selects, computes and publishes in one step.
    pub fn refresh(&mut self, symbol: &str, now: DateTime<Utc>) -> &DisplayCycle {
        let token = self.select(symbol);
        let cycle = self.compute(&token, now);
        self.accept(cycle)
    }

    fn accept(&mut self, cycle: DisplayCycle) -> &DisplayCycle {
        info!(
            cycle = cycle.id,
            symbol = %cycle.symbol,
            bars = cycle.bars.len(),
            "Published display cycle"
        );
        self.current.insert(cycle)
    }

    /// The cycle currently on display.
    pub fn current(&self) -> Option<&DisplayCycle> {
        self.current.as_ref()
    }
}
