//! Implementation of the `forgekit add` command.

use tracing::{info, instrument};

use forgekit_adapters::PackageManager;
use forgekit_core::{application::AddServiceRequest, domain::ServiceType};

use crate::{
    cli::{AddArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `forgekit add` command.
///
/// Missing name or type are asked for interactively unless prompts are
/// disabled. Progress and warnings are reported by the orchestrator.
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = AddServiceRequest {
        name: args.name,
        service_type: args.service_type.map(Into::into),
        database: args.database.map(Into::into),
    };

    let outcome = super::orchestrator(&global, &config, &output).add_service(request)?;
    info!(
        service = %outcome.service.name,
        directory = %outcome.directory.display(),
        "Service added"
    );

    if !output.is_quiet() {
        let service_type = outcome.service.kind();
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", outcome.directory.display()))?;
        if let Some(service_type) = service_type {
            output.print(&format!(
                "  {}",
                dev_command(config.generators.package_manager, service_type)
            ))?;
        }
        if outcome.service.has_database == Some(true) {
            output.print("  docker compose up -d   # start the database")?;
        }
    }

    Ok(())
}

fn dev_command(package_manager: PackageManager, service_type: ServiceType) -> String {
    let script = match service_type {
        ServiceType::NestJs => "start:dev",
        ServiceType::Spa | ServiceType::NextJs | ServiceType::NextJsAuth => "dev",
    };
    format!("{package_manager} run {script}")
}
