//! One module per subcommand.
//!
//! Handlers translate arguments into core requests, wire the adapters, and
//! print results. No business logic lives here.

pub mod add;
pub mod check;
pub mod completions;
pub mod config;
pub mod doctor;
pub mod init;
pub mod list;

use std::sync::Arc;

use forgekit_adapters::{
    JsonConfigStore, LocalFilesystem, SystemProcessRunner, standard_generators,
};
use forgekit_core::application::{ProjectService, ServiceOrchestrator};

use crate::{cli::GlobalArgs, config::AppConfig, output::OutputManager, prompt::prompter_for};

/// Orchestrator over the real filesystem, processes, and terminal.
pub(crate) fn orchestrator(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> ServiceOrchestrator {
    let root = global.project_root();
    let generators = standard_generators(
        Arc::new(SystemProcessRunner::new()),
        Arc::new(LocalFilesystem::new()),
        config.generators.clone(),
    );

    ServiceOrchestrator::new(
        root.clone(),
        Box::new(JsonConfigStore::in_project(&root)),
        Box::new(LocalFilesystem::new()),
        generators,
    )
    .with_prompter(prompter_for(global, config))
    .with_notifier(Box::new(output.clone()))
}

pub(crate) fn project_service(global: &GlobalArgs) -> ProjectService {
    ProjectService::new(Box::new(JsonConfigStore::in_project(global.project_root())))
}
