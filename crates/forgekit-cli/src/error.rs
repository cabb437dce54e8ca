//! CLI-level errors and how they reach the terminal.
//!
//! Everything a command can fail with ends up as a [`CliError`]: core errors
//! pass through untouched, settings and I/O failures get their own variants.
//! [`ErrorCategory`] decides the exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use forgekit_core::error::{ErrorCategory as CoreCategory, ForgeError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `forgekit-core` or the adapters.
    ///
    /// Shown verbatim; suggestions come from the core error.
    #[error(transparent)]
    Core(#[from] ForgeError),

    /// A settings file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { .. } => vec![
                "Check the file shown by: forgekit config path".into(),
                "Use 'forgekit config init' to create a default config".into(),
            ],

            Self::IoError { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    vec!["Check permissions on the project directory".into()]
                }
                _ => vec!["Run with -v for the underlying cause".into()],
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::External | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Message, cause chain (verbose only) and suggestions, styled for a terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if colored { style(text) } else { text.to_owned() }
        };

        let mut lines = vec![String::new()];
        lines.push(format!(
            "{} {}",
            paint("Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        ));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(paint(&format!("  Caused by: {err}"), |t| t.dimmed().to_string()));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("Suggestions:", |t| t.yellow().bold().to_string()));
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint("Use -v / --verbose for more details.", |t| {
                t.dimmed().to_string()
            }));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, "{self}")
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!(%source, "underlying cause");
        }
    }
}

/// How a failure is reported to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid names, conflicts, refused prompts.
    UserError,
    /// No `forgekit.json` where one was expected.
    NotFound,
    /// Unreadable settings or project document.
    Configuration,
    /// Generator, filesystem, and other system failures.
    Internal,
}

impl ErrorCategory {
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
            Self::Internal => 1,
        }
    }
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Attach a context message to an I/O failure at the call-site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use forgekit_core::application::{ApplicationError, AvailabilityError, GenerationError};
    use forgekit_core::domain::DomainError;

    fn core(err: impl Into<ForgeError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── messages ──────────────────────────────────────────────────────────

    #[test]
    fn core_messages_are_not_prefixed() {
        let err = core(DomainError::NestjsSuffixRequired {
            name: "order-api".into(),
        });
        assert_eq!(err.to_string(), "NestJS service names must end with -service");
    }

    #[test]
    fn config_exists_suggests_force() {
        let err = core(ApplicationError::ConfigExists {
            path: PathBuf::from("/tmp/forgekit.json"),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        let err = core(DomainError::NestjsSuffixRequired {
            name: "order-api".into(),
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            core(AvailabilityError::AlreadyRegistered { name: "web".into() }).exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        let err = core(ApplicationError::ConfigNotFound {
            path: PathBuf::from("forgekit.json"),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        assert_eq!(
            core(ApplicationError::ConfigParse {
                path: PathBuf::from("forgekit.json"),
                reason: "expected value".into(),
            })
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        assert_eq!(
            core(GenerationError::PrerequisiteMissing {
                tool: "npx".into(),
                install_hint: "install npm".into(),
            })
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_message_and_suggestions() {
        let err = core(AvailabilityError::FolderExists {
            name: "web".into(),
            path: PathBuf::from("apps/web"),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error: Service name unavailable"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("rm -rf apps/web"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = core(ApplicationError::Cancelled);
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn colored_and_plain_share_content() {
        let err = core(ApplicationError::ConfigNotFound {
            path: PathBuf::from("forgekit.json"),
        });
        let colored = err.format_colored(false);
        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains("forgekit init"));
        assert!(!err.format_plain(false).contains("\u{1b}["));
    }

    #[test]
    fn anyhow_errors_become_configuration_errors() {
        let err: CliError = anyhow::anyhow!("bad key").into();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert!(err.to_string().contains("bad key"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
