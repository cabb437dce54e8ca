//! `forgekit doctor`: Report the external tools the generators need.

use forgekit_adapters::SystemProcessRunner;
use forgekit_core::{
    application::{
        PrerequisiteChecker,
        ports::ProcessRunner,
        services::{PrerequisiteReport, prerequisite_service::ALL_TOOLS},
    },
    error::ForgeError,
};

use crate::{error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    run(&SystemProcessRunner::new(), &output)
}

/// Missing required tools fail the command; missing optional ones only warn.
fn run(runner: &dyn ProcessRunner, output: &OutputManager) -> CliResult<()> {
    let spinner = output.spinner("Checking installed tools...");
    let report = PrerequisiteChecker::new(runner).inspect(ALL_TOOLS);
    spinner.finish_and_clear();

    render(&report, output)?;
    report.require().map_err(ForgeError::from)?;

    let warnings = report.warnings();
    if warnings.is_empty() {
        output.success("Everything forgekit needs is installed")?;
    } else {
        output.success(&format!(
            "Ready to generate services ({} optional tool(s) missing)",
            warnings.len()
        ))?;
    }
    Ok(())
}

fn render(report: &PrerequisiteReport, output: &OutputManager) -> CliResult<()> {
    output.header("Tooling:")?;
    for status in &report.statuses {
        let tool = &status.tool;
        match &status.version {
            Some(version) => output.success(&format!("{:<7} {version}", tool.name))?,
            None if tool.required => output.error(&format!(
                "{:<7} not found, {}. {}",
                tool.name, tool.purpose, tool.install_hint
            ))?,
            None => output.warning(&format!(
                "{:<7} not found, {}. {}",
                tool.name, tool.purpose, tool.install_hint
            ))?,
        }
    }
    Ok(())
}
