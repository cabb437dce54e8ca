//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the external
//! collaborators behind the ports. Naming and document-invariant errors are
//! `DomainError`s from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{NamingError, ServiceType};
use crate::error::ErrorCategory;

/// Why a candidate name cannot be used.
///
/// Returned by the availability checker and surfaced as-is through
/// `ForgeError::Availability`. Format violations are carried through
/// unchanged in `Naming`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error("Service name unavailable: '{name}' is already registered in the project configuration")]
    AlreadyRegistered { name: String },

    #[error("Service name unavailable: folder '{path}' already exists")]
    FolderExists { name: String, path: PathBuf },
}

impl AvailabilityError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Naming(e) => e.suggestions(),
            Self::AlreadyRegistered { .. } => vec!["Choose a different service name".into()],
            Self::FolderExists { path, .. } => vec![
                format!("Remove the folder: rm -rf {}", path.display()),
                "Or choose a different service name".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Naming(_) => ErrorCategory::Validation,
            Self::AlreadyRegistered { .. } | Self::FolderExists { .. } => ErrorCategory::Conflict,
        }
    }
}

/// A generator flow failed to produce its service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The generator process could not be started at all.
    #[error("Failed to launch `{command}` for {service_type} service '{service}': {reason}")]
    LaunchFailed {
        service: String,
        service_type: ServiceType,
        command: String,
        reason: String,
    },

    /// The generator ran and exited unsuccessfully.
    #[error(
        "`{command}` exited with {} while generating {service_type} service '{service}'",
        describe_status(.status)
    )]
    CommandFailed {
        service: String,
        service_type: ServiceType,
        command: String,
        status: Option<i32>,
    },

    /// A tool the generator cannot run without is missing.
    #[error("Required tool '{tool}' was not found on PATH")]
    PrerequisiteMissing { tool: String, install_hint: String },

    /// Writing a file that the service cannot work without failed.
    #[error("Failed to write {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".into(),
    }
}

impl GenerationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LaunchFailed { .. } => vec![
                "Ensure Node.js and npm are installed and on your PATH".into(),
                "Run: forgekit doctor".into(),
            ],
            Self::CommandFailed { .. } => vec![
                "The generator downloads packages from the npm registry; check your network connection".into(),
                "Scroll up for the generator's own output".into(),
                "Files already generated are left in place; remove the folder before retrying".into(),
            ],
            Self::PrerequisiteMissing { install_hint, .. } => {
                vec![install_hint.clone(), "Run: forgekit doctor".into()]
            }
            Self::Io { path, .. } => vec![
                format!("Check write permissions for {}", path.display()),
            ],
        }
    }
}

/// An optional tool is missing; scaffolding continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteWarning {
    pub tool: String,
    pub purpose: String,
}

impl std::fmt::Display for PrerequisiteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Optional tool '{}' not found ({})", self.tool, self.purpose)
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    #[error("No project configuration found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Project configuration at {path} is invalid: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("Failed to write project configuration to {path}: {reason}")]
    ConfigWrite { path: PathBuf, reason: String },

    #[error("A project configuration already exists at {path}")]
    ConfigExists { path: PathBuf },

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    #[error("Missing value for '{field}' and interactive prompts are disabled")]
    PromptUnavailable { field: &'static str },

    #[error("Operation cancelled")]
    Cancelled,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { .. } => vec![
                "Run this command from the project root".into(),
                "Or create a project first: forgekit init <name>".into(),
                "Use --project-dir to point at another project".into(),
            ],
            Self::ConfigParse { .. } => vec![
                "Fix the JSON syntax or restore the file from version control".into(),
            ],
            Self::ConfigWrite { .. } | Self::FilesystemError { .. } => vec![
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ConfigExists { .. } => vec![
                "Use --force to overwrite (destructive)".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run from an interactive terminal, or pass every value as a flag".into(),
            ],
            Self::PromptUnavailable { field } => vec![format!(
                "Provide the {field} on the command line"
            )],
            Self::Cancelled => vec!["No changes were made".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigExists { .. } => ErrorCategory::Conflict,
            Self::ConfigNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::PromptUnavailable { .. } | Self::Cancelled => ErrorCategory::Validation,
            Self::ConfigWrite { .. } | Self::FilesystemError { .. } | Self::PromptFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
