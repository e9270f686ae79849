//! Dataset download command.

use crate::prompt::TerminalPrompter;
use anyhow::Result;
use colored::Colorize;
use roadwatch_pipeline::{
    fetch_dataset, DatasetOutcome, PipelineConfig, PipelineError, RoboflowProvider, API_KEY_ENV,
};
use std::path::PathBuf;

/// Fetch the configured dataset and return its local path.
pub async fn execute(config: &PipelineConfig, force: bool) -> Result<PathBuf> {
    let base = std::env::current_dir()?;
    let outcome =
        fetch_dataset(&config.dataset, &base, &RoboflowProvider, &TerminalPrompter, force)
            .await
            .map_err(with_remediation_hints)?;

    let path = outcome.path().to_path_buf();
    match outcome {
        DatasetOutcome::Reused(_) => {
            println!("{} Using existing dataset: {}", "✓".green(), path.display());
        }
        DatasetOutcome::Downloaded(_) => {
            println!("{} Dataset ready: {}", "✓".green(), path.display());
        }
    }
    Ok(path)
}

fn with_remediation_hints(err: PipelineError) -> anyhow::Error {
    if matches!(err, PipelineError::External(_)) {
        eprintln!("Check:");
        eprintln!("  1. the API key ({API_KEY_ENV})");
        eprintln!("  2. the network connection");
        eprintln!("  3. the workspace and project names in roadwatch.toml");
    }
    err.into()
}
