use crate::error::PipelineResult;
use crate::job::TrainJob;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Artifacts a completed run is expected to leave behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainArtifacts {
    pub save_dir: PathBuf,
    pub last: PathBuf,
    pub best: PathBuf,
}

/// How a training invocation ended.
#[derive(Debug, Clone)]
pub enum TrainRun {
    Completed(TrainArtifacts),
    /// Stopped by the operator mid-run; resumable from the run's last.pt.
    Interrupted,
}

/// External training backend.
#[async_trait]
pub trait Trainer: Send + Sync {
    fn id(&self) -> &'static str;

    async fn train(&self, job: &TrainJob) -> PipelineResult<TrainRun>;

    /// Evaluate trained weights against a dataset descriptor, streaming the
    /// tool's own metric output.
    async fn validate(&self, weights: &Path, descriptor: &Path) -> PipelineResult<()>;
}
