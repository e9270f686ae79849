//! Shared fakes for flow tests.

use crate::config::DatasetConfig;
use crate::error::PipelineResult;
use crate::job::TrainJob;
use crate::prompt::Prompter;
use crate::provider::{DatasetProvider, DownloadRequest};
use crate::trainer::{TrainArtifacts, TrainRun, Trainer};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Prompter with pre-scripted answers; panics on any unscripted prompt.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<bool>>,
    asked: AtomicUsize,
}

impl ScriptedPrompter {
    pub fn new(answers: &[bool]) -> Self {
        Self { answers: Mutex::new(answers.iter().copied().collect()), asked: AtomicUsize::new(0) }
    }

    /// For paths that must fail before any confirmation is shown.
    pub fn expecting_none() -> Self {
        Self::new(&[])
    }

    pub fn prompts_seen(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, _default_yes: bool) -> PipelineResult<bool> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        match self.answers.lock().unwrap().pop_front() {
            Some(answer) => Ok(answer),
            None => panic!("unexpected confirmation prompt: {message}"),
        }
    }
}

/// Provider that counts downloads and materializes the target directory.
pub struct CountingProvider {
    downloads: AtomicUsize,
}

impl CountingProvider {
    pub fn new() -> Self {
        Self { downloads: AtomicUsize::new(0) }
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetProvider for CountingProvider {
    fn id(&self) -> &'static str {
        "fake-provider"
    }

    async fn download(&self, request: &DownloadRequest) -> PipelineResult<PathBuf> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        std::fs::create_dir_all(&request.target_dir)?;
        Ok(request.target_dir.clone())
    }
}

/// Trainer that records every job and reports instant completion.
pub struct RecordingTrainer {
    pub jobs: Mutex<Vec<TrainJob>>,
}

impl RecordingTrainer {
    pub fn new() -> Self {
        Self { jobs: Mutex::new(Vec::new()) }
    }

    pub fn train_calls(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }
}

#[async_trait]
impl Trainer for RecordingTrainer {
    fn id(&self) -> &'static str {
        "fake-trainer"
    }

    async fn train(&self, job: &TrainJob) -> PipelineResult<TrainRun> {
        self.jobs.lock().unwrap().push(job.clone());
        let save_dir = PathBuf::from("runs/detect/train");
        Ok(TrainRun::Completed(TrainArtifacts {
            last: save_dir.join("weights/last.pt"),
            best: save_dir.join("weights/best.pt"),
            save_dir,
        }))
    }

    async fn validate(&self, _weights: &Path, _descriptor: &Path) -> PipelineResult<()> {
        Ok(())
    }
}

pub fn sample_dataset_config() -> DatasetConfig {
    DatasetConfig {
        workspace: "acme".to_string(),
        project: "traffic-cams".to_string(),
        version: 3,
        format: "yolov11".to_string(),
        download_dir: None,
        api_key: Some("test-key".to_string()),
    }
}
