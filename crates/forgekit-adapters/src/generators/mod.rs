//! Generator flows: one per service type.
//!
//! Each flow checks its tooling, creates the workspace folder (`apps/` or
//! `services/`), runs the upstream generator (Vite, create-next-app, the Nest
//! CLI) and then patches the generated files with the allocated port. The
//! generator run is the primary step and its failure is fatal. Patching is
//! secondary: a failed patch is logged and the flow still succeeds.

mod nestjs;
mod nextjs;
mod nextjs_auth;
mod settings;
mod spa;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use forgekit_core::{
    application::{
        GenerationError, Generators,
        ports::{CommandSpec, Filesystem, GenerationRequest, ProcessRunner},
        services::{PrerequisiteChecker, Tool},
    },
    error::ForgeError,
};

pub use nestjs::NestJsGenerator;
pub use nextjs::NextJsGenerator;
pub use nextjs_auth::NextJsAuthGenerator;
pub use settings::{GeneratorSettings, PackageManager};
pub use spa::SpaGenerator;

/// The four standard flows sharing one runner, filesystem, and settings.
pub fn standard_generators(
    runner: Arc<dyn ProcessRunner>,
    filesystem: Arc<dyn Filesystem>,
    settings: GeneratorSettings,
) -> Generators {
    let context = FlowContext::new(runner, filesystem, settings);
    Generators::new(
        Box::new(SpaGenerator::new(context.clone())),
        Box::new(NextJsGenerator::new(context.clone())),
        Box::new(NextJsAuthGenerator::new(context.clone())),
        Box::new(NestJsGenerator::new(context)),
    )
}

/// A post-generation edit that could not be applied.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error(transparent)]
    Filesystem(#[from] ForgeError),

    #[error("{}: could not find `{anchor}`", .file.display())]
    AnchorNotFound { file: PathBuf, anchor: &'static str },

    #[error("{}: {source}", .file.display())]
    Json {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Collaborators shared by every flow.
#[derive(Clone)]
pub struct FlowContext {
    runner: Arc<dyn ProcessRunner>,
    filesystem: Arc<dyn Filesystem>,
    settings: GeneratorSettings,
}

impl FlowContext {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        filesystem: Arc<dyn Filesystem>,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            runner,
            filesystem,
            settings,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Check tooling and create the workspace folder the generator runs in.
    fn prepare(
        &self,
        request: &GenerationRequest,
        tools: &[Tool],
    ) -> Result<PathBuf, GenerationError> {
        PrerequisiteChecker::new(self.runner.as_ref()).ensure(tools)?;

        let workspace = request
            .directory
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if !workspace.as_os_str().is_empty() {
            self.filesystem
                .create_dir_all(&workspace)
                .map_err(|e| GenerationError::Io {
                    path: workspace.clone(),
                    reason: e.to_string(),
                })?;
        }
        Ok(workspace)
    }

    /// Run the upstream generator. Any failure here is fatal.
    fn execute(
        &self,
        request: &GenerationRequest,
        command: CommandSpec,
    ) -> Result<(), GenerationError> {
        info!(%command, service = %request.name, "Running generator");

        let outcome = self
            .runner
            .run(&command)
            .map_err(|e| GenerationError::LaunchFailed {
                service: request.name.clone(),
                service_type: request.service_type,
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !outcome.success {
            return Err(GenerationError::CommandFailed {
                service: request.name.clone(),
                service_type: request.service_type,
                command: command.to_string(),
                status: outcome.code,
            });
        }
        Ok(())
    }

    /// Rewrite a generated file in place.
    fn patch_file(
        &self,
        path: &Path,
        edit: impl FnOnce(&str) -> Result<String, PatchError>,
    ) -> Result<(), PatchError> {
        let original = self.filesystem.read_to_string(path)?;
        let patched = edit(&original)?;
        self.filesystem.write_file(path, &patched)?;
        Ok(())
    }

    /// Write a file next to the generated sources, creating its folder.
    fn add_file(&self, path: &Path, content: &str) -> Result<(), PatchError> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;
        Ok(())
    }

    /// Downgrade a failed post-generation step to a warning.
    fn settle(&self, request: &GenerationRequest, step: &str, result: Result<(), PatchError>) {
        if let Err(error) = result {
            warn!(
                service = %request.name,
                step,
                %error,
                "Post-generation step failed; the service was still created"
            );
        }
    }
}
