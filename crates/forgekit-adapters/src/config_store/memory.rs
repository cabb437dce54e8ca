//! In-memory config store for testing.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use forgekit_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::FrameworkConfig,
    error::{ForgeError, ForgeResult},
};

/// Holds the document in memory. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    config: Option<FrameworkConfig>,
    saves: usize,
}

impl MemoryConfigStore {
    /// Empty store; `load` fails until something is saved.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FrameworkConfig) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.write() {
            inner.config = Some(config);
        }
        store
    }

    /// Current document, if any.
    pub fn snapshot(&self) -> Option<FrameworkConfig> {
        self.inner.read().ok()?.config.clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.inner.read().map(|inner| inner.saves).unwrap_or(0)
    }
}

fn poisoned() -> ForgeError {
    ForgeError::Internal {
        message: "memory config store lock poisoned".into(),
    }
}

impl ConfigStore for MemoryConfigStore {
    fn location(&self) -> PathBuf {
        PathBuf::from("memory://forgekit.json")
    }

    fn exists(&self) -> bool {
        self.snapshot().is_some()
    }

    fn load(&self) -> ForgeResult<FrameworkConfig> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner.config.clone().ok_or_else(|| {
            ApplicationError::ConfigNotFound {
                path: self.location(),
            }
            .into()
        })
    }

    fn save(&self, config: &FrameworkConfig) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.config = Some(config.clone());
        inner.saves += 1;
        Ok(())
    }
}
