//! Training launch command.

use anyhow::Result;
use colored::Colorize;
use roadwatch_pipeline::{launch_training, LaunchOutcome, PipelineConfig, UltralyticsTrainer};
use std::path::{Path, PathBuf};

pub async fn execute(config: &PipelineConfig, dataset: Option<PathBuf>, yes: bool) -> Result<()> {
    let dataset = match dataset {
        Some(dir) => dir,
        None => {
            let base = std::env::current_dir()?;
            config.dataset.expected_path(&base)
        }
    };
    if !dataset.exists() {
        anyhow::bail!(
            "dataset directory not found: {} (run `roadwatch dataset` first)",
            dataset.display()
        );
    }
    run(config, &dataset, yes).await
}

/// Shared by the subcommand and the menu's fresh-start path.
pub async fn launch(config: &PipelineConfig, dataset: &Path, yes: bool) -> Result<()> {
    run(config, dataset, yes).await
}

async fn run(config: &PipelineConfig, dataset: &Path, yes: bool) -> Result<()> {
    let prompter = super::prompter_for(yes);
    let outcome =
        launch_training(dataset, &config.train, false, &UltralyticsTrainer, prompter.as_ref())
            .await?;

    match outcome {
        LaunchOutcome::Completed(_) => println!("{}", "Training complete".bold().green()),
        LaunchOutcome::Interrupted => println!("{}", "Training interrupted".yellow()),
        LaunchOutcome::Declined => {}
    }
    Ok(())
}
