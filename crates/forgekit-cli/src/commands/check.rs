//! `forgekit check`: Dry-run the name checks `add` would apply.

use forgekit_core::{
    domain::{DomainError, ServiceType, validate_global_prefix, validate_service_name},
    error::ForgeError,
};

use crate::{
    cli::{CheckArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if args.prefix {
        validate_global_prefix(&args.name).map_err(naming_error)?;
        output.success(&format!("'{}' can be used as a global URL prefix", args.name))?;
        return Ok(());
    }

    match args.service_type.map(ServiceType::from) {
        Some(service_type) => {
            let directory = super::orchestrator(&global, &config, &output)
                .check_availability(service_type, &args.name)?;
            output.success(&format!(
                "'{}' is available for a {service_type} service ({})",
                args.name,
                directory.display()
            ))?;
        }
        None => {
            validate_service_name(&args.name).map_err(naming_error)?;
            output.success(&format!("'{}' follows the naming rules", args.name))?;
            output.info("Pass --type to also check the -service suffix and this project")?;
        }
    }

    Ok(())
}

fn naming_error(err: forgekit_core::domain::NamingError) -> ForgeError {
    DomainError::from(err).into()
}
