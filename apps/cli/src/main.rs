//! Roadwatch CLI - front end for the detection-model training pipeline.
//!
//! Run without a subcommand for the guided menu, or drive the individual
//! flows directly (`roadwatch dataset`, `roadwatch train`, ...).

mod commands;
mod menu;
mod prompt;

use clap::{Parser, Subcommand};
use roadwatch_pipeline::PipelineConfig;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "roadwatch",
    version,
    about = "Roadwatch - vehicle detection training pipeline",
    long_about = "Roadwatch wraps an external detection trainer and dataset host behind a \
                  guided menu: download a versioned dataset, train from scratch, or resume \
                  from the latest checkpoint."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Path to a roadwatch.toml (overrides discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download the configured dataset
    Dataset {
        /// Re-download even if the dataset directory already exists
        #[arg(long)]
        force: bool,
    },

    /// Train from scratch against a local dataset
    Train {
        /// Dataset directory (defaults to the configured download path)
        dataset: Option<PathBuf>,

        /// Answer prompts with their defaults (non-interactive)
        #[arg(short, long)]
        yes: bool,
    },

    /// Resume training from the latest (or a given) checkpoint
    Resume {
        /// Explicit checkpoint path (defaults to the latest run's last.pt)
        checkpoint: Option<PathBuf>,

        /// Answer prompts with their defaults (non-interactive)
        #[arg(short, long)]
        yes: bool,
    },

    /// List saved weight files across training runs
    Checkpoints {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate trained weights against a dataset
    Validate {
        /// Weights file (.pt)
        weights: PathBuf,

        /// Dataset directory containing the descriptor
        dataset: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber =
        FmtSubscriber::builder().with_max_level(level).without_time().with_target(false).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PipelineConfig::load(args.config.as_deref())?;

    match args.command {
        None => menu::run(&config).await?,
        Some(Command::Dataset { force }) => {
            commands::dataset::execute(&config, force).await?;
        }
        Some(Command::Train { dataset, yes }) => {
            commands::train::execute(&config, dataset, yes).await?;
        }
        Some(Command::Resume { checkpoint, yes }) => {
            commands::resume::execute(&config, checkpoint, yes).await?;
        }
        Some(Command::Checkpoints { json }) => {
            commands::checkpoints::execute(&config, json)?;
        }
        Some(Command::Validate { weights, dataset }) => {
            commands::validate::execute(weights, dataset).await?;
        }
    }

    Ok(())
}
