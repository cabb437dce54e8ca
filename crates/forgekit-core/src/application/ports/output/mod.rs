//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `forgekit-adapters` crate provides the filesystem, config store,
//! process runner, and generator implementations; the CLI provides the
//! prompter and notifier.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::application::{ApplicationError, GenerationError};
use crate::domain::{DatabaseType, FrameworkConfig, FrameworkService, ServiceType};
use crate::error::ForgeResult;

/// Port for the persisted project document.
///
/// Implemented by:
/// - `forgekit_adapters::config_store::JsonConfigStore` (production)
/// - `forgekit_adapters::config_store::MemoryConfigStore` (testing)
///
/// The document is always read and written whole.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Where the document lives, for messages.
    fn location(&self) -> PathBuf;

    /// Whether a document has been persisted yet.
    fn exists(&self) -> bool;

    /// Load the full document.
    fn load(&self) -> ForgeResult<FrameworkConfig>;

    /// Replace the persisted document.
    fn save(&self, config: &FrameworkConfig) -> ForgeResult<()>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `forgekit_adapters::filesystem::LocalFilesystem` (production)
/// - `forgekit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;
}

/// Port for interactive questions. One question per call.
///
/// Implemented by the CLI (dialoguer). `input` must keep asking until
/// `validate` returns `Ok(())`, showing the returned message otherwise.
pub trait Prompter {
    /// Single-select list; returns the chosen index.
    fn select(&self, message: &str, choices: &[&str], default: usize) -> ForgeResult<usize>;

    /// Free-text answer, validated per attempt.
    fn input(
        &self,
        message: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> ForgeResult<String>;
}

/// Prompter for non-interactive runs: every question is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn select(&self, _message: &str, _choices: &[&str], _default: usize) -> ForgeResult<usize> {
        Err(ApplicationError::PromptUnavailable {
            field: "service type",
        }
        .into())
    }

    fn input(
        &self,
        _message: &str,
        _validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> ForgeResult<String> {
        Err(ApplicationError::PromptUnavailable {
            field: "service name",
        }
        .into())
    }
}

/// Port for user-facing progress messages.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn success(&self, message: &str);
}

/// Notifier that only emits tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn warn(&self, message: &str) {
        warn!("{message}");
    }

    fn success(&self, message: &str) {
        info!("{message}");
    }
}

/// Everything a generator flow needs to scaffold one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub name: String,
    pub service_type: ServiceType,
    pub port: u16,
    /// Absolute or project-relative folder the service is generated into.
    pub directory: PathBuf,
    pub database: Option<DatabaseType>,
}

/// Port for the per-type generator flows.
///
/// A flow scaffolds files and returns the entry to record. It receives the
/// document read-only; appending the entry and persisting are done once by
/// the orchestrator.
#[cfg_attr(test, mockall::automock)]
pub trait ServiceGenerator {
    fn generate(
        &self,
        request: &GenerationRequest,
        config: &FrameworkConfig,
    ) -> Result<FrameworkService, GenerationError>;
}

/// An external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How an external program finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub success: bool,
    pub code: Option<i32>,
}

/// Port for running external programs.
///
/// Implemented by `forgekit_adapters::process::SystemProcessRunner`.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run to completion with inherited stdio. Blocks without a timeout.
    fn run(&self, command: &CommandSpec) -> std::io::Result<ProcessOutcome>;

    /// `<program> --version`, trimmed, or `None` when the program is absent.
    fn probe(&self, program: &str) -> Option<String>;
}
