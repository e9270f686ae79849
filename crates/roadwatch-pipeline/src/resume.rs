//! Resume-training flow.

use crate::checkpoints::{find_latest_checkpoint, survey_runs, CheckpointRef, BEST_WEIGHTS, LAST_WEIGHTS};
use crate::error::{PipelineError, PipelineResult};
use crate::job::TrainJob;
use crate::prompt::Prompter;
use crate::trainer::{TrainArtifacts, TrainRun, Trainer};
use std::path::{Path, PathBuf};

/// Most-recent runs shown before the confirmation prompt.
const SURVEY_LIMIT: usize = 5;

#[derive(Debug)]
pub enum ResumeOutcome {
    Completed(TrainArtifacts),
    Interrupted,
    /// Operator declined at the confirmation prompt. Not an error.
    Declined,
}

/// Resume the most recent run, or an explicitly chosen checkpoint.
///
/// With no resolvable checkpoint this returns [`PipelineError::NotFound`]
/// before the trainer is touched.
pub async fn resume_training(
    runs_root: &Path,
    run_prefix: &str,
    explicit: Option<PathBuf>,
    trainer: &dyn Trainer,
    prompter: &dyn Prompter,
) -> PipelineResult<ResumeOutcome> {
    let checkpoint = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(PipelineError::NotFound(format!(
                    "checkpoint does not exist: {}",
                    path.display()
                )));
            }
            // <runs_root>/<run>/weights/last.pt - the run owns the grandparent.
            let run_name = path
                .parent()
                .and_then(Path::parent)
                .and_then(Path::file_name)
                .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().into_owned());
            CheckpointRef { path, run_name }
        }
        None => {
            let runs = survey_runs(runs_root, run_prefix)?;
            if !runs.is_empty() {
                println!("Found {} training run(s):", runs.len());
                for (i, run) in runs.iter().take(SURVEY_LIMIT).enumerate() {
                    let mut present = Vec::new();
                    if run.has_last {
                        present.push(LAST_WEIGHTS);
                    }
                    if run.has_best {
                        present.push(BEST_WEIGHTS);
                    }
                    let status = if present.is_empty() {
                        "no checkpoints".to_string()
                    } else {
                        present.join(", ")
                    };
                    println!("  [{}] {} - {status}", i + 1, run.name);
                }
            }
            find_latest_checkpoint(runs_root, run_prefix)?
        }
    };

    println!("Checkpoint to resume:");
    println!("  Run:  {}", checkpoint.run_name);
    println!("  Path: {}", checkpoint.path.display());

    if !prompter.confirm("Resume from this checkpoint?", true)? {
        println!("Resume cancelled.");
        return Ok(ResumeOutcome::Declined);
    }

    let job = TrainJob::Resume { checkpoint: checkpoint.path };
    match trainer.train(&job).await? {
        TrainRun::Completed(artifacts) => {
            println!("Training finished.");
            println!("  Results: {}", artifacts.save_dir.display());
            Ok(ResumeOutcome::Completed(artifacts))
        }
        TrainRun::Interrupted => {
            println!("Training stopped. Resume again later.");
            Ok(ResumeOutcome::Interrupted)
        }
    }
}
