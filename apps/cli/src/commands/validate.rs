//! Model validation command.

use anyhow::Result;
use roadwatch_pipeline::{resolve_descriptor, Trainer, UltralyticsTrainer};
use std::path::PathBuf;

pub async fn execute(weights: PathBuf, dataset: PathBuf) -> Result<()> {
    if !weights.exists() {
        anyhow::bail!("weights file not found: {}", weights.display());
    }
    let descriptor = resolve_descriptor(&dataset)?;
    println!("Validating {} against {}", weights.display(), descriptor.display());
    UltralyticsTrainer.validate(&weights, &descriptor).await?;
    Ok(())
}
