//! Command-line interface for log-fixture-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Defaults: 100 rows into log.json
//! log-fixture-gen
//!
//! # 3 rows into a chosen file
//! log-fixture-gen 3 /tmp/log.json
//!
//! # Reproducible output, with progress logging
//! RUST_LOG=debug log-fixture-gen 100000 big.json --seed 7
//! ```

use clap::Parser;
use log_fixture_gen::FixtureArgs;

#[derive(Parser)]
#[command(name = "log-fixture-gen")]
#[command(about = "Generate an NDJSON file of synthetic log events for test fixtures")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    fixture: FixtureArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.fixture.into_config();

    log_fixture_gen::run(&config)?;

    Ok(())
}
