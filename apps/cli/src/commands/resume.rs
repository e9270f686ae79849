//! Resume-training command.

use anyhow::Result;
use colored::Colorize;
use roadwatch_pipeline::{resume_training, PipelineConfig, PipelineError, ResumeOutcome, UltralyticsTrainer};
use std::path::PathBuf;

pub async fn execute(config: &PipelineConfig, checkpoint: Option<PathBuf>, yes: bool) -> Result<()> {
    let prompter = super::prompter_for(yes);
    let outcome = resume_training(
        &config.train.runs_root,
        &config.train.run_name,
        checkpoint,
        &UltralyticsTrainer,
        prompter.as_ref(),
    )
    .await;

    match outcome {
        Ok(ResumeOutcome::Completed(_)) => println!("{}", "Training complete".bold().green()),
        Ok(ResumeOutcome::Interrupted) => println!("{}", "Training interrupted".yellow()),
        Ok(ResumeOutcome::Declined) => {}
        Err(e @ PipelineError::NotFound(_)) => {
            eprintln!("{} {e}", "✗".red());
            eprintln!("  Nothing to resume; pick \"Start fresh\" instead.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
