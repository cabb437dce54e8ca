pub mod config;
pub mod service;

pub use config::{CONFIG_FILE_NAME, CloudSection, FrameworkConfig, FrameworkSection, ProjectInfo};
pub use service::FrameworkService;
