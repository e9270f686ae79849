//! Dataset provider backed by the Roboflow CLI.

use crate::error::{PipelineError, PipelineResult};
use crate::provider::{DatasetProvider, DownloadRequest};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

const TOOL: &str = "roboflow";
const REMEDIATION: &str = "install it with `pip install roboflow`";

/// Shells out to `roboflow download`. The credential goes to the child
/// process through its environment, never through argv.
#[derive(Debug, Default)]
pub struct RoboflowProvider;

fn download_args(request: &DownloadRequest) -> Vec<String> {
    vec![
        "download".to_string(),
        "-w".to_string(),
        request.workspace.clone(),
        "-p".to_string(),
        request.project.clone(),
        "-v".to_string(),
        request.version.to_string(),
        "-f".to_string(),
        request.format.clone(),
        "-l".to_string(),
        request.target_dir.display().to_string(),
    ]
}

#[async_trait]
impl DatasetProvider for RoboflowProvider {
    fn id(&self) -> &'static str {
        TOOL
    }

    async fn download(&self, request: &DownloadRequest) -> PipelineResult<PathBuf> {
        let args = download_args(request);
        debug!(?args, "spawning {}", TOOL);

        let mut child = match Command::new(TOOL)
            .args(&args)
            .env("ROBOFLOW_API_KEY", &request.api_key)
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PipelineError::DependencyMissing { tool: TOOL, remediation: REMEDIATION });
            }
            Err(e) => return Err(e.into()),
        };

        let status = child.wait().await?;
        if !status.success() {
            return Err(PipelineError::External(format!("{TOOL} exited with {status}")));
        }
        if !request.target_dir.exists() {
            return Err(PipelineError::External(format!(
                "download reported success but {} does not exist",
                request.target_dir.display()
            )));
        }

        Ok(request.target_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_dataset_config;

    #[test]
    fn test_download_args_carry_identifiers_not_credential() {
        let request =
            DownloadRequest::from_config(&sample_dataset_config(), PathBuf::from("/tmp/ds"))
                .unwrap();
        let args = download_args(&request);

        assert_eq!(args[0], "download");
        for expected in ["acme", "traffic-cams", "3", "yolov11", "/tmp/ds"] {
            assert!(args.iter().any(|a| a == expected), "missing {expected} in {args:?}");
        }
        assert!(!args.iter().any(|a| a.contains("test-key")));
    }
}
