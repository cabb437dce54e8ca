//! forgekit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the forgekit
//! service scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          forgekit-cli (CLI)             │
//! │     (Prompter, Notifier, commands)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ServiceOrchestrator, ProjectService)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ConfigStore, Filesystem, Generators)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    forgekit-adapters (Infrastructure)   │
//! │ (JsonConfigStore, flows, process runner)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (naming rules, ports, FrameworkConfig)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use forgekit_core::{
//!     application::{AddServiceRequest, ServiceOrchestrator},
//!     domain::ServiceType,
//! };
//!
//! # fn run(orchestrator: ServiceOrchestrator) -> forgekit_core::error::ForgeResult<()> {
//! let outcome = orchestrator.add_service(AddServiceRequest {
//!     name: Some("dashboard".into()),
//!     service_type: Some(ServiceType::Spa),
//!     database: None,
//! })?;
//! println!("{} listens on {:?}", outcome.service.name, outcome.service.port);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AddServiceOutcome, AddServiceRequest, Generators, InitProjectRequest, ProjectService,
        ServiceOrchestrator,
        ports::{
            CommandSpec, ConfigStore, Filesystem, GenerationRequest, Notifier, ProcessOutcome,
            ProcessRunner, Prompter, ServiceGenerator,
        },
    };
    pub use crate::domain::{
        CloudProvider, DatabaseType, FrameworkConfig, FrameworkService, FrameworkTemplate,
        ServiceType,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
