//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a service" or "initialise a project".

pub mod availability;
pub mod prerequisite_service;
pub mod project_service;
pub mod service_service;

pub use availability::{AvailabilityChecker, service_directory};
pub use prerequisite_service::{PrerequisiteChecker, PrerequisiteReport, Tool, ToolStatus};
pub use project_service::{InitProjectRequest, ProjectService};
pub use service_service::{AddServiceOutcome, AddServiceRequest, Generators, ServiceOrchestrator};
