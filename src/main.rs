//! `sleep-cycles` command-line entry point.
//!
//! ```bash
//! sleep-cycles bed-at 22:30
//! sleep-cycles wake-at 7am --clock 12h
//! sleep-cycles nap --cycles 1,2 --json
//! SLEEP_CYCLES__CYCLES__LATENCY_MINUTES=15 sleep-cycles now
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use sleep_cycles::adapters::cli::{render_json, render_text, Cli};
use sleep_cycles::adapters::SystemClock;
use sleep_cycles::application::PlanSleepHandler;
use sleep_cycles::config::{AppConfig, LoggingConfig};
use sleep_cycles::ports::Clock;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    init_tracing(&config.logging, cli.verbose);
    debug!(?config, "Configuration loaded");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let handler = PlanSleepHandler::new(Arc::clone(&clock), config.cycles.plan_config());

    let plan = handler
        .handle(cli.query())
        .context("could not compute sleep times")?;

    let format = cli.clock.unwrap_or(config.display.clock).resolve();
    if cli.json {
        let json = render_json(&plan, clock.as_ref(), format).context("failed to serialize plan")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&plan, clock.as_ref(), format));
    }
    Ok(())
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}
