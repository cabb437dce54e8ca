//! `forgekit.json` on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use forgekit_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{CONFIG_FILE_NAME, FrameworkConfig},
    error::ForgeResult,
};

/// Reads and writes the project document as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Store for the document at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `forgekit.json` inside `project_root`.
    pub fn in_project(project_root: impl AsRef<Path>) -> Self {
        Self::new(project_root.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, reason: impl ToString) -> ApplicationError {
        ApplicationError::ConfigWrite {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl ConfigStore for JsonConfigStore {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ForgeResult<FrameworkConfig> {
        if !self.exists() {
            return Err(ApplicationError::ConfigNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: self.path.clone(),
                reason: format!("Failed to read file: {e}"),
            }
        })?;

        let config: FrameworkConfig =
            serde_json::from_str(&raw).map_err(|e| ApplicationError::ConfigParse {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        config.validate()?;

        debug!(services = config.services.len(), "Loaded project document");
        Ok(config)
    }

    /// Writes a sibling temp file and renames it over the document, so a
    /// failed write never leaves a truncated `forgekit.json`.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, config: &FrameworkConfig) -> ForgeResult<()> {
        let mut body = serde_json::to_string_pretty(config).map_err(|e| self.write_error(e))?;
        body.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let staging = self.path.with_extension("json.tmp");
        std::fs::write(&staging, body).map_err(|e| self.write_error(e))?;
        std::fs::rename(&staging, &self.path).map_err(|e| self.write_error(e))?;

        debug!(services = config.services.len(), "Saved project document");
        Ok(())
    }
}
