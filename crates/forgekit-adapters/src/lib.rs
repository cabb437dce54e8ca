//! Infrastructure adapters for forgekit.
//!
//! This crate implements the ports defined in `forgekit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_store;
pub mod filesystem;
pub mod generators;
pub mod process;

// Re-export commonly used adapters
pub use config_store::{JsonConfigStore, MemoryConfigStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generators::{GeneratorSettings, PackageManager, standard_generators};
pub use process::{ScriptedProcessRunner, SystemProcessRunner};
