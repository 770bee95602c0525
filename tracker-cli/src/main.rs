//! # event-tracker
//!
//! Headless run of the event tracker page: submits one identifier, waits
//! out the check and reveal delays on a tokio runtime, and prints the
//! milestone cards as text or JSON. `--html` also writes the revealed page
//! as a static document.
//!
//! ## Usage
//!
//! ```bash
//! event-tracker check alice@upi
//! event-tracker check alice@upi --seed 7 --format json --fast
//! event-tracker check alice@upi --html progress.html
//! ```

mod driver;
mod progress;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracker_core::{
    Checker, Clock, Phase, RandomProgressSource, SystemClock, Timings, TrackerConfig,
};
use tracker_ui::{PageOptions, render_page};

use crate::progress::Spinner;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "event-tracker")]
#[command(about = "Check progress through the install / register / deposit / trading funnel")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one progress check for a UPI ID
    Check(CheckArgs),
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    /// UPI ID to check
    identifier: String,

    /// Seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with timings and odds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the revealed page as static HTML
    #[arg(long)]
    html: Option<PathBuf>,

    /// Skip all delays
    #[arg(long)]
    fast: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

// ============================================================================
// Commands
// ============================================================================

async fn run_check_command(args: CheckArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => TrackerConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TrackerConfig::default(),
    };
    if args.fast {
        config.timings = Timings::instant();
    }

    let source = match args.seed {
        Some(seed) => RandomProgressSource::seeded(&config.odds, seed),
        None => RandomProgressSource::new(&config.odds),
    }
    .context("Failed to build progress source")?;

    let mut checker = Checker::new(config.timings.clone(), source);
    let spinner = Spinner::new(&format!("Checking {}...", args.identifier.trim()));

    let outcome = driver::run_check(&mut checker, &args.identifier, |phase| {
        if phase == Phase::Settled {
            spinner.set_message("Preparing results...");
        }
    })
    .await;

    let snapshot = match outcome {
        Ok(snapshot) => {
            spinner.finish_success("Check complete");
            snapshot
        }
        Err(err) => {
            spinner.finish_clear();
            return Err(err).context("Check was not started");
        }
    };
    info!(progress = snapshot.progress.percent(), "check finished");

    let today = SystemClock.today_label();
    match args.format {
        OutputFormat::Text => {
            let color = !args.no_color && std::io::stdout().is_terminal();
            print!("{}", render::render_text(&snapshot, &today, color));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&snapshot)
                .context("Failed to serialize snapshot")?;
            println!("{json}");
        }
    }

    if let Some(path) = &args.html {
        let html = render_page(&snapshot, &PageOptions { today });
        std::fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "static page written");
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Check(check) => run_check_command(check).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
