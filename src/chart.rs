//! Candlestick chart coordinate mapper.
//!
//! [`map_to_pixels`] turns a bar sequence and a prediction sequence into a
//! flat list of drawable [`Primitive`]s for a `width × height` viewport. The
//! mapping is affine on both axes: time runs left to right across the bar
//! range, price runs bottom to top across the padded high/low range.
//!
//! The output is pure data. [`crate::svg`] serializes it to SVG; any other
//! 2D canvas can walk the same list.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Bar, Prediction};

/// Fractional padding applied below the lowest low and above the highest high.
const PRICE_PADDING: f64 = 0.005;

/// Minimum candle body width in pixels.
const MIN_CANDLE_WIDTH: f64 = 2.0;

/// Horizontal gap between neighbouring candle bodies in pixels.
const CANDLE_GAP: f64 = 2.0;

/// Minimum body height so a doji stays visible.
const MIN_BODY_HEIGHT: f64 = 1.0;

/// Pixels of band half-width per unit of confidence.
const BAND_SCALE: f64 = 10.0;

/// Grid intervals across the price domain; levels are `0..=GRID_STEPS`.
const GRID_STEPS: usize = 5;

/// Horizontal offset of price labels from the y axis.
const LABEL_OFFSET: f64 = -5.0;

/// A hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(pub &'static str);

impl Color {
    pub const BULLISH: Color = Color("#10B981");
    pub const BEARISH: Color = Color("#EF4444");
    pub const PREDICTION: Color = Color("#8B5CF6");
    pub const AXIS: Color = Color("#6B7280");
    pub const LABEL: Color = Color("#9CA3AF");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Chart drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Stroke style for lines and outlined paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub opacity: f64,
    /// Dash and gap lengths; `None` for a solid stroke.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
            dash: None,
        }
    }

    fn dashed(color: Color, width: f64, dash: (f64, f64)) -> Self {
        Self {
            dash: Some(dash),
            ..Self::solid(color, width)
        }
    }
}

/// Fill style for rectangles and closed paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fill {
    pub color: Color,
    pub opacity: f64,
}

/// What a primitive depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Wick,
    Body,
    PredictionLine,
    ConfidenceBand,
    Axis,
    GridLine,
    PriceLabel,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One step of a path outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Close,
}

/// Renders path commands as SVG path data (`M x,y L x,y Z`).
#[must_use]
pub fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|c| match c {
            PathCommand::MoveTo { x, y } => format!("M {x},{y}"),
            PathCommand::LineTo { x, y } => format!("L {x},{y}"),
            PathCommand::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A drawable shape with its position, size and style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    Line {
        role: Role,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    Rect {
        role: Role,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Fill,
    },
    Path {
        role: Role,
        commands: Vec<PathCommand>,
        stroke: Option<Stroke>,
        fill: Option<Fill>,
    },
    Text {
        role: Role,
        x: f64,
        y: f64,
        content: String,
        color: Color,
        #[serde(rename = "fontSize")]
        font_size: f64,
        anchor: TextAnchor,
    },
}

impl Primitive {
    pub fn role(&self) -> Role {
        match self {
            Primitive::Line { role, .. }
            | Primitive::Rect { role, .. }
            | Primitive::Path { role, .. }
            | Primitive::Text { role, .. } => *role,
        }
    }

    /// Every coordinate and size the primitive carries.
    pub fn coordinates(&self) -> Vec<f64> {
        match self {
            Primitive::Line { x1, y1, x2, y2, .. } => vec![*x1, *y1, *x2, *y2],
            Primitive::Rect {
                x, y, width, height, ..
            } => vec![*x, *y, *width, *height],
            Primitive::Path { commands, .. } => commands
                .iter()
                .flat_map(|c| match c {
                    PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => vec![*x, *y],
                    PathCommand::Close => Vec::new(),
                })
                .collect(),
            Primitive::Text { x, y, .. } => vec![*x, *y],
        }
    }
}

/// Affine price → y mapping over a padded price domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    pub min: f64,
    pub max: f64,
    height: f64,
}

impl PriceScale {
    /// Fits the domain to every high and low in `bars`, padded by 0.5% on
    /// both ends. Returns `None` for empty input.
    #[must_use]
    pub fn fit(bars: &[Bar], height: f64) -> Option<Self> {
        if bars.is_empty() {
            return None;
        }
        let (lo, hi) = bars
            .iter()
            .flat_map(|b| [b.high, b.low])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p), hi.max(p))
            });
        Some(Self {
            min: lo * (1.0 - PRICE_PADDING),
            max: hi * (1.0 + PRICE_PADDING),
            height,
        })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Zero, negative or non-finite range.
    pub fn is_degenerate(&self) -> bool {
        let range = self.range();
        !(range.is_finite() && range > 0.0)
    }

    /// Maps a price to a y pixel. A degenerate domain maps every price to
    /// mid-height.
    pub fn to_y(&self, price: f64) -> f64 {
        if self.is_degenerate() {
            return self.height / 2.0;
        }
        self.height - (price - self.min) / self.range() * self.height
    }
}

/// Affine timestamp → x mapping over the bar time range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub start: i64,
    pub end: i64,
    width: f64,
}

impl TimeScale {
    #[must_use]
    pub fn fit(bars: &[Bar], width: f64) -> Option<Self> {
        let first = bars.first()?;
        let last = bars.last()?;
        Some(Self {
            start: first.timestamp,
            end: last.timestamp,
            width,
        })
    }

    /// Maps a timestamp to an x pixel. A zero-length span (one bar) maps every
    /// timestamp to the horizontal center.
    pub fn to_x(&self, timestamp: i64) -> f64 {
        let start = self.start as f64;
        let span = self.end as f64 - start;
        if span <= 0.0 {
            return self.width / 2.0;
        }
        (timestamp as f64 - start) / span * self.width
    }
}

/// Maps bars and predictions into drawable primitives.
///
/// Output order: per bar a wick then a body; the prediction line and the
/// confidence band when `predictions` is non-empty; the y axis; then a grid
/// line and price label for each of the six price levels. Empty `bars`
/// yields an empty list.
#[must_use]
pub fn map_to_pixels(bars: &[Bar], predictions: &[Prediction], viewport: Viewport) -> Vec<Primitive> {
    let (Some(prices), Some(times), Some(last)) = (
        PriceScale::fit(bars, viewport.height),
        TimeScale::fit(bars, viewport.width),
        bars.last(),
    ) else {
        return Vec::new();
    };

    if prices.is_degenerate() {
        warn!(
            min = prices.min,
            max = prices.max,
            "Degenerate price range; drawing at mid-height"
        );
    }

    let mut out = Vec::with_capacity(bars.len() * 2 + 3 + (GRID_STEPS + 1) * 2);

    let candle_width = (viewport.width / bars.len() as f64 - CANDLE_GAP).max(MIN_CANDLE_WIDTH);
    for bar in bars {
        push_candle(&mut out, bar, candle_width, &prices, &times);
    }

    if !predictions.is_empty() {
        let anchor = (times.to_x(last.timestamp), prices.to_y(last.close));
        let points: Vec<(f64, f64, f64)> = predictions
            .iter()
            .map(|p| {
                (
                    times.to_x(p.timestamp),
                    prices.to_y(p.predicted_price),
                    BAND_SCALE * p.confidence,
                )
            })
            .collect();
        out.push(prediction_line(anchor, &points));
        out.push(confidence_band(anchor, &points));
    }

    out.push(Primitive::Line {
        role: Role::Axis,
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: viewport.height,
        stroke: Stroke::solid(Color::AXIS, 1.0),
    });

    let step = prices.range() / GRID_STEPS as f64;
    for i in 0..=GRID_STEPS {
        let price = prices.min + step * i as f64;
        let y = prices.to_y(price);
        out.push(Primitive::Line {
            role: Role::GridLine,
            x1: 0.0,
            y1: y,
            x2: viewport.width,
            y2: y,
            stroke: Stroke {
                opacity: 0.2,
                ..Stroke::dashed(Color::AXIS, 0.5, (4.0, 4.0))
            },
        });
        out.push(Primitive::Text {
            role: Role::PriceLabel,
            x: LABEL_OFFSET,
            y,
            content: format!("{price:.2}"),
            color: Color::LABEL,
            font_size: 10.0,
            anchor: TextAnchor::End,
        });
    }

    debug!(
        bars = bars.len(),
        predictions = predictions.len(),
        primitives = out.len(),
        "Mapped chart primitives"
    );
    out
}

fn push_candle(out: &mut Vec<Primitive>, bar: &Bar, width: f64, prices: &PriceScale, times: &TimeScale) {
    let color = if bar.is_bullish() {
        Color::BULLISH
    } else {
        Color::BEARISH
    };
    let x = times.to_x(bar.timestamp);

    out.push(Primitive::Line {
        role: Role::Wick,
        x1: x,
        y1: prices.to_y(bar.high),
        x2: x,
        y2: prices.to_y(bar.low),
        stroke: Stroke::solid(color, 1.0),
    });

    let open_y = prices.to_y(bar.open);
    let close_y = prices.to_y(bar.close);
    out.push(Primitive::Rect {
        role: Role::Body,
        x: x - width / 2.0,
        y: open_y.min(close_y),
        width,
        height: (close_y - open_y).abs().max(MIN_BODY_HEIGHT),
        fill: Fill {
            color,
            opacity: 1.0,
        },
    });
}

fn prediction_line(anchor: (f64, f64), points: &[(f64, f64, f64)]) -> Primitive {
    let mut commands = vec![PathCommand::MoveTo {
        x: anchor.0,
        y: anchor.1,
    }];
    commands.extend(points.iter().map(|&(x, y, _)| PathCommand::LineTo { x, y }));

    Primitive::Path {
        role: Role::PredictionLine,
        commands,
        stroke: Some(Stroke::dashed(Color::PREDICTION, 2.0, (5.0, 5.0))),
        fill: None,
    }
}

/// Upper edge forward, lower edge backward, closed at the anchor.
fn confidence_band(anchor: (f64, f64), points: &[(f64, f64, f64)]) -> Primitive {
    let mut commands = Vec::with_capacity(points.len() * 2 + 3);
    commands.push(PathCommand::MoveTo {
        x: anchor.0,
        y: anchor.1,
    });
    commands.extend(
        points
            .iter()
            .map(|&(x, y, half)| PathCommand::LineTo { x, y: y - half }),
    );
    commands.extend(
        points
            .iter()
            .rev()
            .map(|&(x, y, half)| PathCommand::LineTo { x, y: y + half }),
    );
    commands.push(PathCommand::LineTo {
        x: anchor.0,
        y: anchor.1,
    });
    commands.push(PathCommand::Close);

    Primitive::Path {
        role: Role::ConfidenceBand,
        commands,
        stroke: None,
        fill: Some(Fill {
            color: Color::PREDICTION,
            opacity: 0.1,
        }),
    }
}
