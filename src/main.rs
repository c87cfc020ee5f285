use std::io::Write;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use stockscope::StockscopeError;
use stockscope::config::{OutputFormat, fetch_config};
use stockscope::dashboard::Dashboard;
use stockscope::format::{QuoteCard, format_date};
use stockscope::insights::{QuoteStats, summarize};
use stockscope::leaderboard::{DEFAULT_MOVERS, find_symbol, top_movers};
use stockscope::models::{load_universe, popular_stocks};
use stockscope::svg::to_svg;

fn main() -> Result<(), StockscopeError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = fetch_config()?;
    info!(symbol = %config.symbol, days = config.days, horizon = config.horizon, "Loaded configuration");

    let universe = match &config.universe_path {
        Some(path) => load_universe(path)?,
        None => popular_stocks(),
    };

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut dashboard = Dashboard::new(rng, config.viewport)
        .with_days(config.days)
        .with_horizon(config.horizon);
    let cycle = dashboard.refresh(&config.symbol, Utc::now());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match config.output {
        OutputFormat::Svg => out.write_all(to_svg(&cycle.primitives, config.viewport).as_bytes())?,
        OutputFormat::Json => {
            let quote = find_symbol(&universe, &config.symbol);
            if quote.is_none() {
                warn!(symbol = %config.symbol, "Symbol not in universe; omitting quote cards");
            }
            let (gainers, losers) = top_movers(&universe, DEFAULT_MOVERS);
            let report = serde_json::json!({
                "chart": cycle,
                "asOf": cycle.bars.last().and_then(|bar| format_date(bar.timestamp)),
                "quote": quote,
                "card": quote.map(QuoteCard::from_quote),
                "stats": quote.map(QuoteStats::from_quote),
                "insights": quote.map(|q| summarize(q, &cycle.predictions)),
                "gainers": gainers,
                "losers": losers,
            });
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
