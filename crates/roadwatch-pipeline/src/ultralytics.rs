//! Trainer backed by the Ultralytics `yolo` CLI.
//!
//! All optimization, checkpoint serialization and device dispatch happen
//! inside the external process; this adapter only builds the invocation and
//! watches for completion or an operator interrupt.

use crate::checkpoints::{self, BEST_WEIGHTS, LAST_WEIGHTS, WEIGHTS_DIR};
use crate::error::{PipelineError, PipelineResult};
use crate::job::TrainJob;
use crate::trainer::{TrainArtifacts, TrainRun, Trainer};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

const TOOL: &str = "yolo";
const REMEDIATION: &str = "install it with `pip install ultralytics`";

#[derive(Debug, Default)]
pub struct UltralyticsTrainer;

fn flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn train_args(job: &TrainJob) -> Vec<String> {
    match job {
        TrainJob::Resume { checkpoint } => vec![
            "detect".to_string(),
            "train".to_string(),
            format!("model={}", checkpoint.display()),
            "resume=True".to_string(),
        ],
        TrainJob::Fresh { descriptor, settings, resume } => vec![
            "detect".to_string(),
            "train".to_string(),
            format!("model={}", settings.model),
            format!("data={}", descriptor.display()),
            format!("epochs={}", settings.epochs),
            format!("batch={}", settings.batch_size),
            format!("imgsz={}", settings.image_size),
            format!("device={}", settings.device),
            format!("project={}", settings.runs_root.display()),
            format!("name={}", settings.run_name),
            format!("patience={}", settings.patience),
            format!("workers={}", settings.workers),
            format!("cache={}", flag(settings.cache)),
            format!("amp={}", flag(settings.amp)),
            format!("resume={}", flag(*resume)),
            "save=True".to_string(),
            format!("save_period={}", settings.save_period),
            "plots=True".to_string(),
            "verbose=True".to_string(),
        ],
    }
}

impl UltralyticsTrainer {
    /// Spawn the tool with inherited stdio and wait for it, racing against
    /// Ctrl+C. Returns None when the operator interrupted the run.
    async fn run_tool(&self, args: &[String]) -> PipelineResult<Option<std::process::ExitStatus>> {
        debug!(?args, "spawning {}", TOOL);
        let mut child = match Command::new(TOOL).args(args).spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PipelineError::DependencyMissing { tool: TOOL, remediation: REMEDIATION });
            }
            Err(e) => return Err(e.into()),
        };

        tokio::select! {
            status = child.wait() => Ok(Some(status?)),
            _ = tokio::signal::ctrl_c() => {
                child.kill().await.ok();
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl Trainer for UltralyticsTrainer {
    fn id(&self) -> &'static str {
        "ultralytics"
    }

    async fn train(&self, job: &TrainJob) -> PipelineResult<TrainRun> {
        let Some(status) = self.run_tool(&train_args(job)).await? else {
            return Ok(TrainRun::Interrupted);
        };
        if !status.success() {
            return Err(PipelineError::External(format!("{TOOL} exited with {status}")));
        }

        let artifacts = match job {
            TrainJob::Fresh { settings, .. } => {
                latest_artifacts(&settings.runs_root, &settings.run_name)?
            }
            TrainJob::Resume { checkpoint } => artifacts_for_checkpoint(checkpoint),
        };
        Ok(TrainRun::Completed(artifacts))
    }

    async fn validate(&self, weights: &Path, descriptor: &Path) -> PipelineResult<()> {
        let args = vec![
            "detect".to_string(),
            "val".to_string(),
            format!("model={}", weights.display()),
            format!("data={}", descriptor.display()),
        ];
        let Some(status) = self.run_tool(&args).await? else {
            return Ok(());
        };
        if !status.success() {
            return Err(PipelineError::External(format!("{TOOL} exited with {status}")));
        }
        Ok(())
    }
}

/// The tool auto-increments run names, so the freshest matching run owns the
/// artifacts of the invocation that just ended.
fn latest_artifacts(root: &Path, prefix: &str) -> PipelineResult<TrainArtifacts> {
    let runs = checkpoints::survey_runs(root, prefix)?;
    let Some(run) = runs.first() else {
        return Err(PipelineError::NotFound(format!(
            "training finished but no run directory under {}",
            root.display()
        )));
    };

    let weights = run.path.join(WEIGHTS_DIR);
    Ok(TrainArtifacts {
        save_dir: run.path.clone(),
        last: weights.join(LAST_WEIGHTS),
        best: weights.join(BEST_WEIGHTS),
    })
}

/// For a resumed run the artifacts stay in the checkpoint's own run
/// directory (`<run>/weights/last.pt`).
fn artifacts_for_checkpoint(checkpoint: &Path) -> TrainArtifacts {
    let weights = checkpoint.parent().map(Path::to_path_buf).unwrap_or_default();
    let save_dir = weights.parent().map(Path::to_path_buf).unwrap_or_default();
    TrainArtifacts {
        save_dir,
        last: weights.join(LAST_WEIGHTS),
        best: weights.join(BEST_WEIGHTS),
    }
}
