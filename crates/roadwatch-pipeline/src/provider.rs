use crate::config::{DatasetConfig, API_KEY_ENV};
use crate::error::{PipelineError, PipelineResult};
use async_trait::async_trait;
use std::path::PathBuf;

/// Everything a provider needs for one dataset download.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub workspace: String,
    pub project: String,
    pub version: u32,
    pub format: String,
    pub target_dir: PathBuf,
    pub api_key: String,
}

impl DownloadRequest {
    /// Build a request from configuration. The credential is required here,
    /// not at config load, so read-only operations work unconfigured.
    pub fn from_config(cfg: &DatasetConfig, target_dir: PathBuf) -> PipelineResult<Self> {
        cfg.validate()?;
        let api_key = cfg
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                PipelineError::InvalidConfig(format!(
                    "no dataset credential configured; export {API_KEY_ENV}"
                ))
            })?;

        Ok(Self {
            workspace: cfg.workspace.clone(),
            project: cfg.project.clone(),
            version: cfg.version,
            format: cfg.format.clone(),
            target_dir,
            api_key,
        })
    }
}

/// Hosted dataset source.
///
/// The production implementation shells out to the provider's CLI; tests
/// substitute an in-process fake.
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Download the dataset into `request.target_dir` and return the
    /// resulting path.
    async fn download(&self, request: &DownloadRequest) -> PipelineResult<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_dataset_config;

    #[test]
    fn test_from_config_copies_identifiers() {
        let cfg = sample_dataset_config();
        let request = DownloadRequest::from_config(&cfg, PathBuf::from("/tmp/ds")).unwrap();
        assert_eq!(request.workspace, "acme");
        assert_eq!(request.project, "traffic-cams");
        assert_eq!(request.version, 3);
        assert_eq!(request.format, "yolov11");
        assert_eq!(request.api_key, "test-key");
    }

    #[test]
    fn test_from_config_requires_credential() {
        let cfg = DatasetConfig { api_key: None, ..sample_dataset_config() };
        let err = DownloadRequest::from_config(&cfg, PathBuf::from("/tmp/ds")).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_config_rejects_blank_credential() {
        let cfg = DatasetConfig { api_key: Some("   ".to_string()), ..sample_dataset_config() };
        assert!(DownloadRequest::from_config(&cfg, PathBuf::from("/tmp/ds")).is_err());
    }
}
