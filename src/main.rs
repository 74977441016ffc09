use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rota::store;
use rota::wire;

/// Render an on-call rotation with overrides into a segment timeline.
#[derive(Debug, Parser)]
#[command(name = "rota", version, about)]
struct Args {
    /// Path to the schedule JSON document.
    #[arg(long)]
    schedule: PathBuf,

    /// Path to the overrides JSON document (an array, possibly empty).
    #[arg(long)]
    overrides: PathBuf,

    /// Window start, ISO-8601 (e.g. 2025-11-07T17:00:00Z).
    #[arg(long)]
    from: DateTime<Utc>,

    /// Window end, ISO-8601, exclusive. Must be after the start.
    #[arg(long)]
    until: DateTime<Utc>,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let schedule = store::load_schedule(&args.schedule)?;
    let overrides = store::load_overrides(&args.overrides)?;
    let entries = wire::render_schedule(&schedule, &overrides, args.from, args.until)?;
    Ok(serde_json::to_string_pretty(&entries)?)
}
