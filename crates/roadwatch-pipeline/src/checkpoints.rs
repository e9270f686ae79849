//! Checkpoint discovery over the results directory tree.
//!
//! The external trainer writes one directory per run under a results root
//! (`runs/detect/train*` by default), each with a `weights/` subdirectory
//! holding `last.pt` and `best.pt`. This module only reads that tree.

use crate::error::{PipelineError, PipelineResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

pub const WEIGHTS_DIR: &str = "weights";
/// Weight file from the most recent epoch; the resume anchor.
pub const LAST_WEIGHTS: &str = "last.pt";
/// Weight file with the highest validation metric.
pub const BEST_WEIGHTS: &str = "best.pt";

/// Resolved checkpoint: the weight file plus its owning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointRef {
    pub path: PathBuf,
    pub run_name: String,
}

/// Display-oriented view of one training run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
    pub has_last: bool,
    pub has_best: bool,
}

/// One weight artifact found under the results root.
#[derive(Debug, Clone, Serialize)]
pub struct WeightFile {
    pub run: String,
    pub file: String,
    pub path: PathBuf,
    pub size_mb: f64,
    pub modified: DateTime<Utc>,
}

/// Immediate subdirectories of `root` whose name starts with `prefix`,
/// newest first. Names break mtime ties so the ordering is deterministic.
fn matching_runs(root: &Path, prefix: &str) -> PipelineResult<Vec<(PathBuf, SystemTime)>> {
    let dir = match std::fs::read_dir(root) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut runs = Vec::new();
    for entry in dir {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        runs.push((path, modified));
    }

    runs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    Ok(runs)
}

/// All matching runs under `root`, newest first.
pub fn survey_runs(root: &Path, prefix: &str) -> PipelineResult<Vec<RunSummary>> {
    Ok(matching_runs(root, prefix)?
        .into_iter()
        .map(|(path, modified)| {
            let weights = path.join(WEIGHTS_DIR);
            RunSummary {
                name: path.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned()),
                has_last: weights.join(LAST_WEIGHTS).exists(),
                has_best: weights.join(BEST_WEIGHTS).exists(),
                path,
                modified,
            }
        })
        .collect())
}

/// Resolve the checkpoint to resume from.
///
/// Only the most recently modified run is considered: when the latest run
/// lacks `last.pt`, resolution reports not-found even if an older run has a
/// usable checkpoint.
pub fn find_latest_checkpoint(root: &Path, prefix: &str) -> PipelineResult<CheckpointRef> {
    let runs = matching_runs(root, prefix)?;
    let Some((path, _)) = runs.first() else {
        return Err(PipelineError::NotFound(format!(
            "no training runs under {}",
            root.display()
        )));
    };

    let run_name =
        path.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    let checkpoint = path.join(WEIGHTS_DIR).join(LAST_WEIGHTS);
    if !checkpoint.exists() {
        return Err(PipelineError::NotFound(format!("{run_name} has no {LAST_WEIGHTS}")));
    }

    Ok(CheckpointRef { path: checkpoint, run_name })
}

/// Every weight file across every matching run. Informational listing only;
/// resolution goes through [`find_latest_checkpoint`].
pub fn list_weight_files(root: &Path, prefix: &str) -> PipelineResult<Vec<WeightFile>> {
    let mut out = Vec::new();

    for (run_path, _) in matching_runs(root, prefix)? {
        let run =
            run_path.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        let weights = run_path.join(WEIGHTS_DIR);

        for entry in WalkDir::new(&weights)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("pt") {
                continue;
            }
            let meta = entry.metadata().map_err(std::io::Error::from)?;
            out.push(WeightFile {
                run: run.clone(),
                file: path
                    .file_name()
                    .map_or_else(String::new, |n| n.to_string_lossy().into_owned()),
                path: path.to_path_buf(),
                size_mb: meta.len() as f64 / (1024.0 * 1024.0),
                modified: DateTime::<Utc>::from(meta.modified()?),
            });
        }
    }

    Ok(out)
}
