//! Application configuration loaded from environment variables.
//!
//! Every variable is optional:
//! - `STOCKSCOPE_SYMBOL`: symbol to render (default `AAPL`)
//! - `STOCKSCOPE_DAYS`: calendar days of history (default 90)
//! - `STOCKSCOPE_HORIZON`: prediction steps (default 7)
//! - `STOCKSCOPE_WIDTH` / `STOCKSCOPE_HEIGHT`: chart viewport in pixels
//! - `STOCKSCOPE_SEED`: fixed seed for reproducible output
//! - `STOCKSCOPE_OUTPUT`: `svg` or `json`
//! - `STOCKSCOPE_UNIVERSE`: path to a JSON file of quote snapshots

use std::path::PathBuf;
use std::str::FromStr;

use crate::chart::Viewport;
use crate::generator::{DEFAULT_DAYS, DEFAULT_HORIZON};

const DEFAULT_SYMBOL: &str = "AAPL";
const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 300.0;

/// Output format written by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
}

impl FromStr for OutputFormat {
    type Err = crate::StockscopeError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            other => Err(crate::StockscopeError::Config(format!(
                "STOCKSCOPE_OUTPUT must be `svg` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub symbol: String,
    pub days: u32,
    pub horizon: u32,
    pub viewport: Viewport,
    /// `None` seeds the random source from OS entropy.
    pub seed: Option<u64>,
    pub output: OutputFormat,
    pub universe_path: Option<PathBuf>,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`StockscopeError::Config`](crate::StockscopeError::Config) if a
/// numeric variable does not parse, a viewport dimension is not positive, or
/// the output format is unknown.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let symbol = non_empty_var("STOCKSCOPE_SYMBOL")
        .map(|s| s.to_ascii_uppercase())
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

    let days = parse_var("STOCKSCOPE_DAYS")?.unwrap_or(DEFAULT_DAYS);
    let horizon = parse_var("STOCKSCOPE_HORIZON")?.unwrap_or(DEFAULT_HORIZON);
    let width = positive_var("STOCKSCOPE_WIDTH")?.unwrap_or(DEFAULT_WIDTH);
    let height = positive_var("STOCKSCOPE_HEIGHT")?.unwrap_or(DEFAULT_HEIGHT);
    let seed = parse_var("STOCKSCOPE_SEED")?;
    let output = match non_empty_var("STOCKSCOPE_OUTPUT") {
        Some(value) => value.parse()?,
        None => OutputFormat::Svg,
    };
    let universe_path = non_empty_var("STOCKSCOPE_UNIVERSE").map(PathBuf::from);

    Ok(AppConfig {
        symbol,
        days,
        horizon,
        viewport: Viewport::new(width, height),
        seed,
        output,
        universe_path,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> crate::Result<Option<T>> {
    non_empty_var(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| {
                crate::StockscopeError::Config(format!("{name} has invalid value `{raw}`"))
            })
        })
        .transpose()
}

fn positive_var(name: &str) -> crate::Result<Option<f64>> {
    match parse_var::<f64>(name)? {
        Some(v) if v.is_finite() && v > 0.0 => Ok(Some(v)),
        Some(v) => Err(crate::StockscopeError::Config(format!(
            "{name} must be a positive number, got {v}"
        ))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL_VARS: [&str; 8] = [
        "STOCKSCOPE_SYMBOL",
        "STOCKSCOPE_DAYS",
        "STOCKSCOPE_HORIZON",
        "STOCKSCOPE_WIDTH",
        "STOCKSCOPE_HEIGHT",
        "STOCKSCOPE_SEED",
        "STOCKSCOPE_OUTPUT",
        "STOCKSCOPE_UNIVERSE",
    ];

    /// Helper that clears every config var, applies `vars`, runs `f`, then
    /// restores the originals.
    ///
    /// # Safety
    ///
    /// `ENV_LOCK` serializes every test that touches these variables; nothing
    /// else in the crate reads them.
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let originals: Vec<(&str, Option<String>)> = ALL_VARS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: guarded by ENV_LOCK.
        unsafe {
            for k in ALL_VARS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, still holding ENV_LOCK.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&[], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.symbol, DEFAULT_SYMBOL);
            assert_eq!(config.days, 90);
            assert_eq!(config.horizon, 7);
            assert_eq!(config.viewport, Viewport::new(800.0, 300.0));
            assert!(config.seed.is_none());
            assert_eq!(config.output, OutputFormat::Svg);
            assert!(config.universe_path.is_none());
        });
    }

    #[test]
    fn loads_values_from_env() {
        with_env(
            &[
                ("STOCKSCOPE_SYMBOL", "nvda"),
                ("STOCKSCOPE_DAYS", "30"),
                ("STOCKSCOPE_HORIZON", "3"),
                ("STOCKSCOPE_WIDTH", "640"),
                ("STOCKSCOPE_HEIGHT", "240.5"),
                ("STOCKSCOPE_SEED", "42"),
                ("STOCKSCOPE_OUTPUT", "JSON"),
                ("STOCKSCOPE_UNIVERSE", "/tmp/quotes.json"),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.symbol, "NVDA");
                assert_eq!(config.days, 30);
                assert_eq!(config.horizon, 3);
                assert_eq!(config.viewport, Viewport::new(640.0, 240.5));
                assert_eq!(config.seed, Some(42));
                assert_eq!(config.output, OutputFormat::Json);
                assert_eq!(
                    config.universe_path.as_deref(),
                    Some(std::path::Path::new("/tmp/quotes.json"))
                );
            },
        );
    }

    #[test]
    fn rejects_unparsable_days() {
        with_env(&[("STOCKSCOPE_DAYS", "ninety")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("STOCKSCOPE_DAYS"));
        });
    }

    #[test]
    fn rejects_non_positive_viewport() {
        with_env(&[("STOCKSCOPE_HEIGHT", "0")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("must be a positive number"));
        });
    }

    #[test]
    fn rejects_unknown_output_format() {
        with_env(&[("STOCKSCOPE_OUTPUT", "png")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("`png`"));
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("STOCKSCOPE_SYMBOL", ""),
                ("STOCKSCOPE_SEED", ""),
                ("STOCKSCOPE_OUTPUT", ""),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.symbol, DEFAULT_SYMBOL);
                assert!(config.seed.is_none());
                assert_eq!(config.output, OutputFormat::Svg);
            },
        );
    }
}
