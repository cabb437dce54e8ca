//! `forgekit init`: Create the project document.

use tracing::instrument;

use forgekit_core::application::InitProjectRequest;

use crate::{
    cli::{GlobalArgs, InitArgs},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let root = global.project_root();
    std::fs::create_dir_all(&root)
        .with_cli_context(|| format!("Failed to create project directory '{}'", root.display()))?;

    let config = super::project_service(&global).init(InitProjectRequest {
        name: args.name,
        description: args.description,
        cloud: args.cloud.map(Into::into),
        template: args.template.map(Into::into),
        force: args.force,
    })?;

    output.success(&format!(
        "Project '{}' initialised in {}",
        config.project.name,
        root.display()
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  forgekit add            # pick a type and name")?;
        output.print("  forgekit add web --type spa")?;
    }

    Ok(())
}
