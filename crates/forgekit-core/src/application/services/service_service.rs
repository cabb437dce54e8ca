//! Service Orchestrator - the `add` use case.
//!
//! This service coordinates adding one service to a project:
//! 1. Load the project document
//! 2. Allocate the next port
//! 3. Resolve the service type (request or prompt)
//! 4. Warn when an auth frontend has no auth backend to talk to
//! 5. Resolve and validate the service name (request or prompt)
//! 6. Report progress
//! 7. Dispatch to exactly one generator flow
//! 8. Append the returned entry and persist the document once
//!
//! Validation failures abort before anything is generated or written.
//! Generator failures propagate unchanged; nothing is cleaned up.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            ConfigStore, Filesystem, GenerationRequest, NonInteractivePrompter, Notifier,
            Prompter, ServiceGenerator, TracingNotifier,
        },
        services::availability::AvailabilityChecker,
    },
    domain::{
        DatabaseType, DomainError, FrameworkService, ServiceType,
        require_service_suffix, validate_service_name,
    },
    error::{ForgeError, ForgeResult},
};

/// Input for [`ServiceOrchestrator::add_service`].
///
/// Missing values are asked for through the prompter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddServiceRequest {
    pub name: Option<String>,
    pub service_type: Option<ServiceType>,
    pub database: Option<DatabaseType>,
}

/// What a successful `add` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddServiceOutcome {
    pub service: FrameworkService,
    pub directory: PathBuf,
    pub config_path: PathBuf,
}

/// One generator flow per service type.
pub struct Generators {
    spa: Box<dyn ServiceGenerator>,
    nextjs: Box<dyn ServiceGenerator>,
    nextjs_auth: Box<dyn ServiceGenerator>,
    nestjs: Box<dyn ServiceGenerator>,
}

impl Generators {
    pub fn new(
        spa: Box<dyn ServiceGenerator>,
        nextjs: Box<dyn ServiceGenerator>,
        nextjs_auth: Box<dyn ServiceGenerator>,
        nestjs: Box<dyn ServiceGenerator>,
    ) -> Self {
        Self {
            spa,
            nextjs,
            nextjs_auth,
            nestjs,
        }
    }

    pub fn for_type(&self, service_type: ServiceType) -> &dyn ServiceGenerator {
        match service_type {
            ServiceType::Spa => self.spa.as_ref(),
            ServiceType::NextJs => self.nextjs.as_ref(),
            ServiceType::NextJsAuth => self.nextjs_auth.as_ref(),
            ServiceType::NestJs => self.nestjs.as_ref(),
        }
    }
}

/// Adds services to a project.
pub struct ServiceOrchestrator {
    project_root: PathBuf,
    store: Box<dyn ConfigStore>,
    filesystem: Box<dyn Filesystem>,
    generators: Generators,
    prompter: Box<dyn Prompter>,
    notifier: Box<dyn Notifier>,
}

impl ServiceOrchestrator {
    /// Create an orchestrator that never prompts and reports only through
    /// tracing. Use [`with_prompter`](Self::with_prompter) and
    /// [`with_notifier`](Self::with_notifier) for terminal use.
    pub fn new(
        project_root: impl Into<PathBuf>,
        store: Box<dyn ConfigStore>,
        filesystem: Box<dyn Filesystem>,
        generators: Generators,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            store,
            filesystem,
            generators,
            prompter: Box::new(NonInteractivePrompter),
            notifier: Box::new(TracingNotifier),
        }
    }

    pub fn with_prompter(mut self, prompter: Box<dyn Prompter>) -> Self {
        self.prompter = prompter;
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Add one service to the project.
    #[instrument(
        skip_all,
        fields(
            name = request.name.as_deref().unwrap_or("<prompt>"),
            service_type = ?request.service_type,
        )
    )]
    pub fn add_service(&self, request: AddServiceRequest) -> ForgeResult<AddServiceOutcome> {
        let mut config = self.store.load()?;

        let port = config.next_port()?;
        debug!(port, services = config.services.len(), "Port allocated");

        let service_type = match request.service_type {
            Some(service_type) => service_type,
            None => self.prompt_service_type()?,
        };

        if service_type == ServiceType::NextJsAuth && config.auth_service().is_none() {
            warn!("nextjs-auth requested without an auth service");
            self.notifier.warn(
                "No auth service found in this project. Add a NestJS service whose name \
                 contains 'auth-service' for the generated app to authenticate against.",
            );
        }

        let database = match request.database {
            Some(db) if service_type != ServiceType::NestJs => {
                self.notifier.warn(&format!(
                    "Databases are only provisioned for nestjs services; ignoring {db}"
                ));
                None
            }
            other => other,
        };

        let (name, directory) = {
            let checker =
                AvailabilityChecker::new(&config, self.filesystem.as_ref(), &self.project_root);
            let name = match request.name {
                Some(name) => {
                    check_candidate(&checker, service_type, &name)?;
                    name
                }
                None => self.prompt_service_name(&checker, service_type)?,
            };
            let directory = checker.service_dir(service_type, &name);
            (name, directory)
        };

        self.notifier
            .info(&format!("Creating {service_type} service '{name}'"));
        self.notifier.info(&format!("Allocated port {port}"));

        let generation = GenerationRequest {
            name,
            service_type,
            port,
            directory,
            database,
        };
        let service = self
            .generators
            .for_type(service_type)
            .generate(&generation, &config)?;
        info!(service = %service.name, "Generator finished");

        config.add_service(service.clone())?;
        self.store.save(&config)?;

        let config_path = self.store.location();
        self.notifier.success(&format!(
            "Added {service_type} service '{}' on port {port}",
            service.name
        ));

        Ok(AddServiceOutcome {
            service,
            directory: generation.directory,
            config_path,
        })
    }

    /// Run every name check `add` would run, without generating anything.
    ///
    /// Returns the folder the service would be generated into.
    #[instrument(skip(self))]
    pub fn check_availability(
        &self,
        service_type: ServiceType,
        name: &str,
    ) -> ForgeResult<PathBuf> {
        let config = self.store.load()?;
        let checker =
            AvailabilityChecker::new(&config, self.filesystem.as_ref(), &self.project_root);
        check_candidate(&checker, service_type, name)?;
        Ok(checker.service_dir(service_type, name))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn prompt_service_type(&self) -> ForgeResult<ServiceType> {
        let labels: Vec<&str> = ServiceType::ALL.iter().map(ServiceType::label).collect();
        let index = self.prompter.select("Select service type", &labels, 0)?;

        ServiceType::ALL.get(index).copied().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("selection {index} is out of range"),
            }
            .into()
        })
    }

    fn prompt_service_name(
        &self,
        checker: &AvailabilityChecker<'_>,
        service_type: ServiceType,
    ) -> ForgeResult<String> {
        let message = if service_type.requires_service_suffix() {
            "Service name (must end with -service)"
        } else {
            "Service name"
        };
        let validate = |candidate: &str| {
            check_candidate(checker, service_type, candidate).map_err(|e| e.to_string())
        };

        let name = self.prompter.input(message, &validate)?;
        check_candidate(checker, service_type, &name)?;
        Ok(name)
    }
}

/// Rule engine, then the NestJS suffix, then availability.
fn check_candidate(
    checker: &AvailabilityChecker<'_>,
    service_type: ServiceType,
    name: &str,
) -> ForgeResult<()> {
    validate_service_name(name).map_err(DomainError::from)?;
    require_service_suffix(service_type, name)?;
    checker
        .check(service_type, name)
        .map_err(ForgeError::from)
}
