//! Pipeline configuration loading.
//!
//! Configuration precedence:
//! 1. Explicit `--config` path
//! 2. `roadwatch.toml` in the working directory
//! 3. `~/.roadwatch/roadwatch.toml`
//! 4. Defaults
//!
//! The provider credential is taken from the `ROADWATCH_API_KEY` environment
//! variable, overriding any value in the file.

use crate::error::{PipelineError, PipelineResult};
use crate::job::TrainSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable holding the dataset provider credential.
pub const API_KEY_ENV: &str = "ROADWATCH_API_KEY";

const CONFIG_FILE: &str = "roadwatch.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PipelineConfig {
    pub dataset: DatasetConfig,
    pub train: TrainSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DatasetConfig {
    /// Provider workspace the project lives in.
    pub workspace: String,
    /// Project holding the labeled dataset.
    pub project: String,
    /// Dataset version to download.
    pub version: u32,
    /// Export format understood by the trainer.
    pub format: String,
    /// Fixed download directory. When unset, datasets land in a
    /// `<project>-<version>` directory under the working directory.
    pub download_dir: Option<PathBuf>,
    /// Provider credential. Prefer the `ROADWATCH_API_KEY` environment
    /// variable over committing this to a config file.
    pub api_key: Option<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            workspace: String::new(),
            project: String::new(),
            version: 1,
            format: "yolov11".to_string(),
            download_dir: None,
            api_key: None,
        }
    }
}

impl DatasetConfig {
    /// Check the identifiers needed to talk to the provider. Called at
    /// first use rather than at load so the menu and checkpoint listing
    /// work without a configured dataset.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.workspace.trim().is_empty() {
            return Err(PipelineError::InvalidConfig(
                "dataset.workspace is required; set it in roadwatch.toml".to_string(),
            ));
        }
        if self.project.trim().is_empty() {
            return Err(PipelineError::InvalidConfig(
                "dataset.project is required; set it in roadwatch.toml".to_string(),
            ));
        }
        if self.version == 0 {
            return Err(PipelineError::InvalidConfig("dataset.version must be >= 1".to_string()));
        }
        if self.format.trim().is_empty() {
            return Err(PipelineError::InvalidConfig("dataset.format must not be empty".to_string()));
        }
        Ok(())
    }

    /// Expected local dataset directory, resolved relative to `base`.
    #[must_use]
    pub fn expected_path(&self, base: &Path) -> PathBuf {
        match &self.download_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base.join(dir),
            None => base.join(format!("{}-{}", self.project, self.version)),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(raw: &str) -> PipelineResult<Self> {
        let cfg: Self = toml::from_str(raw)?;
        cfg.train.validate()?;
        Ok(cfg)
    }

    /// Load configuration from an explicit path or the discovery chain,
    /// falling back to defaults when no file exists.
    pub fn load(explicit: Option<&Path>) -> PipelineResult<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => discover_config_file(),
        };

        let mut cfg = match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading configuration");
                Self::from_toml_str(&std::fs::read_to_string(&p)?)?
            }
            None => Self::default(),
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                cfg.dataset.api_key = Some(key);
            }
        }

        Ok(cfg)
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::home_dir().map(|home| home.join(".roadwatch").join(CONFIG_FILE)).filter(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let cfg = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.train.epochs, 100);
        assert_eq!(cfg.train.batch_size, 16);
        assert_eq!(cfg.dataset.format, "yolov11");
        assert!(cfg.dataset.api_key.is_none());
    }

    #[test]
    fn test_full_file_parses() {
        let cfg = PipelineConfig::from_toml_str(
            r#"
            [dataset]
            workspace = "acme"
            project = "traffic-cams"
            version = 3
            format = "yolov11"
            download_dir = "datasets/traffic"

            [train]
            model = "yolo11s.pt"
            epochs = 50
            device = "cpu"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.dataset.workspace, "acme");
        assert_eq!(cfg.dataset.version, 3);
        assert_eq!(cfg.train.model, "yolo11s.pt");
        assert_eq!(cfg.train.epochs, 50);
        assert_eq!(cfg.train.device, "cpu");
        // Unspecified train fields keep their defaults.
        assert_eq!(cfg.train.image_size, 640);
        cfg.dataset.validate().unwrap();
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(PipelineConfig::from_toml_str("[train]\nepocs = 10\n").is_err());
    }

    #[test]
    fn test_invalid_train_settings_fail_at_load() {
        let err = PipelineConfig::from_toml_str("[train]\nepochs = 0\n").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig(_)));
    }

    #[test]
    fn test_dataset_validate_requires_identifiers() {
        let cfg = DatasetConfig::default();
        assert!(matches!(cfg.validate(), Err(PipelineError::InvalidConfig(_))));
    }

    #[test]
    fn test_expected_path_is_project_version_by_default() {
        let cfg = DatasetConfig {
            project: "traffic-cams".to_string(),
            version: 3,
            ..DatasetConfig::default()
        };
        assert_eq!(
            cfg.expected_path(Path::new("/work")),
            PathBuf::from("/work/traffic-cams-3")
        );
    }

    #[test]
    fn test_expected_path_honors_download_dir() {
        let relative = DatasetConfig {
            download_dir: Some(PathBuf::from("datasets/traffic")),
            ..DatasetConfig::default()
        };
        assert_eq!(
            relative.expected_path(Path::new("/work")),
            PathBuf::from("/work/datasets/traffic")
        );

        let absolute = DatasetConfig {
            download_dir: Some(PathBuf::from("/srv/datasets")),
            ..DatasetConfig::default()
        };
        assert_eq!(absolute.expected_path(Path::new("/work")), PathBuf::from("/srv/datasets"));
    }
}
