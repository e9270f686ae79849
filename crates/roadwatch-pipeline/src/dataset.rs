//! Dataset fetch flow and descriptor resolution.

use crate::config::DatasetConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::prompt::Prompter;
use crate::provider::{DatasetProvider, DownloadRequest};
use std::path::{Path, PathBuf};

/// Descriptor names the trainer understands, tried in order.
const DESCRIPTOR_NAMES: [&str; 3] = ["data.yaml", "dataset.yaml", "config.yaml"];

/// How the dataset path was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOutcome {
    /// An existing directory was reused as-is. Presence is judged by path
    /// existence only; contents are not verified against the configured
    /// version.
    Reused(PathBuf),
    Downloaded(PathBuf),
}

impl DatasetOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Reused(p) | Self::Downloaded(p) => p,
        }
    }
}

/// Fetch the configured dataset, reusing a previously downloaded directory
/// unless `force` is set or the operator asks for a fresh copy.
pub async fn fetch_dataset(
    cfg: &DatasetConfig,
    base: &Path,
    provider: &dyn DatasetProvider,
    prompter: &dyn Prompter,
    force: bool,
) -> PipelineResult<DatasetOutcome> {
    cfg.validate()?;
    let expected = cfg.expected_path(base);

    if expected.exists() && !force {
        println!("Found existing dataset: {}", expected.display());
        let redownload = prompter.confirm("Download again?", false)?;
        if !redownload {
            println!("Using the existing dataset.");
            return Ok(DatasetOutcome::Reused(expected));
        }
    }

    let request = DownloadRequest::from_config(cfg, expected)?;
    println!("Connecting to {}...", provider.id());
    println!("  Workspace: {}", request.workspace);
    println!("  Project:   {}", request.project);
    println!("  Version:   {}", request.version);
    println!("  Format:    {}", request.format);

    let path = provider.download(&request).await?;
    println!("Download complete: {}", path.display());
    print_dataset_layout(&path)?;

    Ok(DatasetOutcome::Downloaded(path))
}

/// Top-level listing of the downloaded directory for operator visibility.
fn print_dataset_layout(path: &Path) -> PipelineResult<()> {
    let mut entries: Vec<_> =
        std::fs::read_dir(path)?.collect::<Result<Vec<_>, std::io::Error>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    println!("Dataset layout:");
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            let files = std::fs::read_dir(entry.path())?.count();
            println!("  {name}/ ({files} files)");
        } else {
            println!("  {name}");
        }
    }
    Ok(())
}

/// Locate the dataset descriptor file the trainer needs.
pub fn resolve_descriptor(dataset_dir: &Path) -> PipelineResult<PathBuf> {
    for name in DESCRIPTOR_NAMES {
        let candidate = dataset_dir.join(name);
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(PipelineError::NotFound(format!(
        "no dataset descriptor ({}) in {}",
        DESCRIPTOR_NAMES.join(", "),
        dataset_dir.display()
    )))
}
