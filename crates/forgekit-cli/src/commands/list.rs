//! Implementation of the `forgekit list` command.

use forgekit_core::{domain::FrameworkService, error::ForgeError};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let project = super::project_service(&global).load()?;
    let services = &project.services;

    match args.format {
        ListFormat::Table => {
            if services.is_empty() {
                output.info(&format!(
                    "Project '{}' has no services yet. Add one with: forgekit add",
                    project.project.name
                ))?;
                return Ok(());
            }
            output.header(&format!("Services in '{}':", project.project.name))?;
            let width = services.iter().map(|s| s.name.len()).max().unwrap_or(0);
            for service in services {
                output.print(&table_row(service, width))?;
            }
        }
        ListFormat::Json => {
            // Straight to stdout: JSON must stay parseable even with --quiet.
            let json = serde_json::to_string_pretty(services).map_err(|e| ForgeError::Internal {
                message: format!("failed to serialise services: {e}"),
            })?;
            println!("{json}");
        }
        ListFormat::Plain => {
            for service in services {
                println!("{}", service.name);
            }
        }
    }

    Ok(())
}

fn table_row(service: &FrameworkService, width: usize) -> String {
    let port = service
        .port
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".into());
    let mut row = format!(
        "  {:<width$}  {:<12} {:>5}",
        service.name, service.service_type, port
    );

    if let Some(prefix) = &service.global_prefix {
        row.push_str(&format!("  /{prefix}"));
    }
    if let (Some(db), Some(db_port)) = (&service.database_type, service.database_port) {
        row.push_str(&format!("  {db}:{db_port}"));
    }
    if let Some(base) = &service.base_service {
        row.push_str(&format!("  -> {base}"));
    }
    row
}
