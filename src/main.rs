//! Kelly Optimizer — Entry Point
//!
//! Computes the optimal Kelly fraction for a discrete set of weighted
//! outcomes and renders the result to the terminal.
//!
//! Wiring sequence:
//! 1. Load config.toml (path via KELLY_OPT_CONFIG) + validate
//! 2. Init tracing (stderr, so logs never interleave with the report)
//! 3. Wire console prompt + report + optional JSONL session log
//! 4. Run one analysis session and exit

use anyhow::{Context, Result};
use tracing::info;

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::console::{ConsoleReport, InteractivePrompt};
use adapters::persistence::SessionLogger;
use usecases::AnalysisSession;

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path =
        std::env::var("KELLY_OPT_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging on stderr ─────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.app.log_level)
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Kelly optimizer"
    );

    // ── 3. Wire adapters ────────────────────────────────────
    let source = InteractivePrompt::new(&config.sizing);
    let sink = ConsoleReport::new(&config.chart);
    let store = if config.persistence.enabled {
        Some(
            SessionLogger::new(&config.persistence.data_dir)
                .context("Failed to open session log")?,
        )
    } else {
        None
    };

    // ── 4. Run one analysis session ─────────────────────────
    let mut session = AnalysisSession::new(source, sink, store, &config);
    session.run()
}
