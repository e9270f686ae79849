//! Training launch flow.

use crate::dataset::resolve_descriptor;
use crate::error::PipelineResult;
use crate::job::{TrainJob, TrainSettings};
use crate::prompt::Prompter;
use crate::trainer::{TrainArtifacts, TrainRun, Trainer};
use std::path::Path;

#[derive(Debug)]
pub enum LaunchOutcome {
    Completed(TrainArtifacts),
    /// Interrupted mid-run; resumable later from the run's last.pt.
    Interrupted,
    /// Operator declined at the confirmation prompt. Not an error.
    Declined,
}

/// Launch a training run against a local dataset directory.
///
/// Descriptor resolution happens before anything is shown to the operator,
/// so a missing descriptor fails without a prompt.
pub async fn launch_training(
    dataset_dir: &Path,
    settings: &TrainSettings,
    resume: bool,
    trainer: &dyn Trainer,
    prompter: &dyn Prompter,
) -> PipelineResult<LaunchOutcome> {
    settings.validate()?;
    let descriptor = resolve_descriptor(dataset_dir)?;
    println!("Found dataset descriptor: {}", descriptor.display());

    print_settings(settings, dataset_dir);

    if !prompter.confirm("Start training?", true)? {
        println!("Training cancelled.");
        return Ok(LaunchOutcome::Declined);
    }

    println!("Starting training via {} (Ctrl+C stops; resume later)", trainer.id());
    let job = TrainJob::Fresh { descriptor, settings: settings.clone(), resume };
    match trainer.train(&job).await? {
        TrainRun::Completed(artifacts) => {
            println!("Training finished.");
            println!("  Results: {}", artifacts.save_dir.display());
            println!("  Best:    {}", artifacts.best.display());
            println!("  Last:    {}", artifacts.last.display());
            Ok(LaunchOutcome::Completed(artifacts))
        }
        TrainRun::Interrupted => {
            println!("Training stopped. Resume later from the latest checkpoint.");
            Ok(LaunchOutcome::Interrupted)
        }
    }
}

fn print_settings(settings: &TrainSettings, dataset_dir: &Path) {
    println!("Training configuration:");
    println!("  Model:      {}", settings.model);
    println!("  Dataset:    {}", dataset_dir.display());
    println!("  Epochs:     {}", settings.epochs);
    println!("  Batch size: {}", settings.batch_size);
    println!("  Image size: {}", settings.image_size);
    println!("  Device:     {}", settings.device);
    println!("  Patience:   {}", settings.patience);
    println!("  Workers:    {}", settings.workers);
    println!("  Cache:      {}", settings.cache);
    println!("  AMP:        {}", settings.amp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::testutil::{RecordingTrainer, ScriptedPrompter};
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_descriptor_fails_before_any_prompt() {
        let temp = TempDir::new().unwrap();
        let trainer = RecordingTrainer::new();
        let prompter = ScriptedPrompter::expecting_none();

        let err = launch_training(
            temp.path(),
            &TrainSettings::default(),
            false,
            &trainer,
            &prompter,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, PipelineError::NotFound(_)));
        assert_eq!(trainer.train_calls(), 0);
        assert_eq!(prompter.prompts_seen(), 0);
    }

    #[tokio::test]
    async fn test_declined_confirmation_skips_trainer() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("data.yaml"), "names: [car]\n").unwrap();
        let trainer = RecordingTrainer::new();
        let prompter = ScriptedPrompter::new(&[false]);

        let outcome = launch_training(
            temp.path(),
            &TrainSettings::default(),
            false,
            &trainer,
            &prompter,
        )
        .await
        .unwrap();

        assert!(matches!(outcome, LaunchOutcome::Declined));
        assert_eq!(trainer.train_calls(), 0);
    }

    #[tokio::test]
    async fn test_confirmed_launch_passes_fresh_job() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("data.yaml"), "names: [car]\n").unwrap();
        let trainer = RecordingTrainer::new();
        let prompter = ScriptedPrompter::new(&[true]);

        let outcome = launch_training(
            temp.path(),
            &TrainSettings::default(),
            false,
            &trainer,
            &prompter,
        )
        .await
        .unwrap();

        assert!(matches!(outcome, LaunchOutcome::Completed(_)));
        let jobs = trainer.jobs.lock().unwrap();
        assert_eq!(jobs.len(), 1);
        match &jobs[0] {
            TrainJob::Fresh { descriptor, resume, .. } => {
                assert_eq!(descriptor, &temp.path().join("data.yaml"));
                assert!(!resume);
            }
            other => panic!("expected a fresh job, got {other:?}"),
        }
    }
}
