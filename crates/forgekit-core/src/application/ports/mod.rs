//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `forgekit-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ConfigStore`: project document persistence
//!   - `Filesystem`: existence checks and file writes
//!   - `ProcessRunner`: external generator processes
//!   - `ServiceGenerator`: one flow per service type
//!   - `Prompter`, `Notifier`: terminal interaction
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CommandSpec, ConfigStore, Filesystem, GenerationRequest, NonInteractivePrompter, Notifier,
    ProcessOutcome, ProcessRunner, Prompter, ServiceGenerator, TracingNotifier,
};

#[cfg(test)]
pub use output::{
    MockConfigStore, MockFilesystem, MockNotifier, MockProcessRunner, MockServiceGenerator,
};
