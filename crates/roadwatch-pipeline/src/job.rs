use crate::error::{PipelineError, PipelineResult};
use serde::Deserialize;
use std::path::PathBuf;

/// Hyperparameters and output layout for a training invocation.
///
/// Immutable for a given run; the values are passed through to the external
/// trainer unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TrainSettings {
    /// Base model identifier (e.g. yolo11n.pt, yolo11s.pt, ...).
    pub model: String,
    pub epochs: u32,
    pub batch_size: u32,
    pub image_size: u32,
    /// Epochs without improvement before the trainer stops early.
    pub patience: u32,
    /// Device selector ("0" for the first GPU, "cpu" for CPU).
    pub device: String,
    /// Data-loading workers inside the trainer.
    pub workers: u32,
    pub cache: bool,
    /// Automatic mixed precision.
    pub amp: bool,
    /// Results root the trainer writes run directories under.
    pub runs_root: PathBuf,
    /// Run name prefix; the trainer auto-increments on collision.
    pub run_name: String,
    /// Periodic checkpoint interval in epochs.
    pub save_period: u32,
}

impl Default for TrainSettings {
    fn default() -> Self {
        Self {
            model: "yolo11n.pt".to_string(),
            epochs: 100,
            batch_size: 16,
            image_size: 640,
            patience: 50,
            device: "0".to_string(),
            workers: 8,
            cache: true,
            amp: true,
            runs_root: PathBuf::from("runs/detect"),
            run_name: "train".to_string(),
            save_period: 10,
        }
    }
}

impl TrainSettings {
    pub fn validate(&self) -> PipelineResult<()> {
        if self.model.trim().is_empty() {
            return Err(PipelineError::InvalidConfig("train.model must not be empty".to_string()));
        }
        if self.epochs == 0 {
            return Err(PipelineError::InvalidConfig("train.epochs must be >= 1".to_string()));
        }
        if self.batch_size == 0 {
            return Err(PipelineError::InvalidConfig("train.batch_size must be >= 1".to_string()));
        }
        if self.image_size < 32 {
            return Err(PipelineError::InvalidConfig("train.image_size must be >= 32".to_string()));
        }
        if self.save_period == 0 {
            return Err(PipelineError::InvalidConfig("train.save_period must be >= 1".to_string()));
        }
        if self.run_name.trim().is_empty() {
            return Err(PipelineError::InvalidConfig("train.run_name must not be empty".to_string()));
        }
        Ok(())
    }
}

/// A single trainer invocation.
#[derive(Debug, Clone)]
pub enum TrainJob {
    /// Train from scratch against a dataset descriptor.
    Fresh { descriptor: PathBuf, settings: TrainSettings, resume: bool },
    /// Continue a prior run from its saved checkpoint. Epoch count,
    /// optimizer state and learning-rate schedule come from the checkpoint
    /// itself; restoration is entirely the trainer's.
    Resume { checkpoint: PathBuf },
}
