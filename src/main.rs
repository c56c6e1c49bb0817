use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use loan_movement::cli::{handle_config_command, handle_run_command, RunArgs};
use loan_movement::config::{ReportPaths, Settings};

#[derive(Parser)]
#[command(
    name = "loan-movement",
    version,
    about = "Daily loan/OD balance movement exception report",
    long_about = "Compares today's loan and overdraft snapshot with yesterday's and \
                  prints every account whose balance moved by at least the configured \
                  threshold, grouped by loan category."
)]
struct Cli {
    /// Base directory holding config.json, input/ and output/
    #[arg(long, global = true, env = "LOAN_MOVEMENT_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce the report for the date in the report date file
    Run(RunArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = match cli.data_dir {
        Some(dir) => ReportPaths::with_base_dir(dir),
        None => ReportPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "Loaded settings");

    match cli.command {
        Commands::Run(args) => {
            if let Err(e) = handle_run_command(&paths, &settings, args) {
                tracing::error!("Report run failed: {}", e);
                return Err(e.into());
            }
        }
        Commands::Config => handle_config_command(&paths, &settings),
    }

    Ok(())
}

fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
