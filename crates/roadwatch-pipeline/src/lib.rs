//! Roadwatch pipeline
//!
//! Orchestration primitives for a detection-model training pipeline:
//! - Locating checkpoints left behind by prior training runs
//! - Fetching versioned datasets from a hosted provider
//! - Launching and resuming training through an external trainer
//! - Configuration and a closed error taxonomy for all of the above
//!
//! Model optimization, checkpoint serialization and dataset versioning all
//! happen inside external tools; this crate only sequences them.

pub mod checkpoints;
pub mod config;
pub mod dataset;
pub mod error;
pub mod gpu;
pub mod job;
pub mod launch;
pub mod prompt;
pub mod provider;
pub mod resume;
pub mod roboflow;
pub mod trainer;
pub mod ultralytics;

pub use checkpoints::{
    find_latest_checkpoint, list_weight_files, survey_runs, CheckpointRef, RunSummary, WeightFile,
};
pub use config::{DatasetConfig, PipelineConfig, API_KEY_ENV};
pub use dataset::{fetch_dataset, resolve_descriptor, DatasetOutcome};
pub use error::{PipelineError, PipelineResult};
pub use gpu::{probe_gpu, GpuStatus};
pub use job::{TrainJob, TrainSettings};
pub use launch::{launch_training, LaunchOutcome};
pub use prompt::{AssumeDefaults, Prompter};
pub use provider::{DatasetProvider, DownloadRequest};
pub use resume::{resume_training, ResumeOutcome};
pub use roboflow::RoboflowProvider;
pub use trainer::{TrainArtifacts, TrainRun, Trainer};
pub use ultralytics::UltralyticsTrainer;

#[cfg(test)]
pub(crate) mod testutil;
