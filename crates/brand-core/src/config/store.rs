//! Reading and writing config files in the project root

use super::{ConfigError, ProjectConfig, ScaffoldConfig, SCAFFOLD_CONFIG_FILE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Access to the two config files of a project
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
    project_file: &'static str,
}

impl ConfigStore {
    /// Create a store for the project rooted at `root`
    pub fn new(root: impl Into<PathBuf>, project_file: &'static str) -> Self {
        Self {
            root: root.into(),
            project_file,
        }
    }

    /// Path of the project config file
    pub fn project_config_path(&self) -> PathBuf {
        self.root.join(self.project_file)
    }

    /// Path of shadcn's `components.json`
    pub fn scaffold_config_path(&self) -> PathBuf {
        self.root.join(SCAFFOLD_CONFIG_FILE)
    }

    pub async fn read_project_config(&self) -> Result<ProjectConfig, ConfigError> {
        read_json(&self.project_config_path()).await
    }

    pub async fn write_project_config(&self, config: &ProjectConfig) -> Result<(), ConfigError> {
        write_json(&self.project_config_path(), config).await
    }

    pub async fn read_scaffold_config(&self) -> Result<ScaffoldConfig, ConfigError> {
        read_json(&self.scaffold_config_path()).await
    }

    pub async fn write_scaffold_config(&self, config: &ScaffoldConfig) -> Result<(), ConfigError> {
        write_json(&self.scaffold_config_path(), config).await
    }

    /// Blocking variant for contexts that cannot await, such as `Drop`
    pub(crate) fn write_scaffold_config_blocking(
        &self,
        config: &ScaffoldConfig,
    ) -> Result<(), ConfigError> {
        let file = self.scaffold_config_path();
        let content = to_json(&file, config)?;
        std::fs::write(&file, content).map_err(|source| ConfigError::Write { file, source })
    }
}

async fn read_json<T: DeserializeOwned>(file: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(file).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConfigError::NotInitialized {
                file: file.to_path_buf(),
            }
        } else {
            ConfigError::Read {
                file: file.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        file: file.to_path_buf(),
        source,
    })
}

async fn write_json<T: Serialize>(file: &Path, value: &T) -> Result<(), ConfigError> {
    let content = to_json(file, value)?;
    fs::write(file, content)
        .await
        .map_err(|source| ConfigError::Write {
            file: file.to_path_buf(),
            source,
        })
}

/// Pretty JSON (two-space indent) with a trailing newline
fn to_json<T: Serialize>(file: &Path, value: &T) -> Result<String, ConfigError> {
    let mut content = serde_json::to_string_pretty(value).map_err(|source| {
        ConfigError::Write {
            file: file.to_path_buf(),
            source: source.into(),
        }
    })?;
    content.push('\n');
    Ok(content)
}
