//! Application layer for forgekit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ServiceOrchestrator, ProjectService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AddServiceOutcome, AddServiceRequest, AvailabilityChecker, Generators, InitProjectRequest,
    PrerequisiteChecker, ProjectService, ServiceOrchestrator,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigStore, Filesystem, Notifier, ProcessRunner, Prompter, ServiceGenerator};

pub use error::{ApplicationError, AvailabilityError, GenerationError, PrerequisiteWarning};
