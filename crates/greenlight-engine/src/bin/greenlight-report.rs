//! Prints a full engine run over the embedded catalog and the demo
//! portfolio as one JSON document. Logs go to stderr so stdout stays
//! machine-readable.

use std::io::{self, Write};

use greenlight_engine::{demo, MarketIntelligence};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let engine = MarketIntelligence::with_builtin_catalog()?;
    let now = demo::fixed_now();
    let concept = demo::sample_concept()?;
    let activity = demo::sample_activity();
    let portfolio = demo::sample_portfolio();

    let report = serde_json::json!({
        "generated_at": now,
        "concept": concept,
        "buyer_matches": engine.match_buyers(&concept, &activity),
        "producer_matches": engine.match_producers(&concept, &activity),
        "diversification": engine.diversification(&portfolio),
        "portfolio_summary": engine.portfolio_summary(&portfolio, now),
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    out.write_all(b"\n")?;
    Ok(())
}
