//! The persisted project document (`forgekit.json`).

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{
    entities::FrameworkService,
    error::DomainError,
    naming::{require_service_suffix, validate_service_name},
    port_allocator,
    value_objects::{CloudProvider, FrameworkTemplate},
};

/// File name of the project document, relative to the project root.
pub const CONFIG_FILE_NAME: &str = "forgekit.json";

/// Substring identifying an authentication backend.
const AUTH_SERVICE_MARKER: &str = "auth-service";

/// Whole project document. Read and written in full, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig {
    pub project: ProjectInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<FrameworkSection>,

    #[serde(default)]
    pub cloud: CloudSection,

    #[serde(default)]
    pub services: Vec<FrameworkService>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environments: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `framework` section. Keys other than `template` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameworkSection {
    #[serde(default)]
    pub template: Option<FrameworkTemplate>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CloudSection {
    #[serde(default)]
    pub provider: Option<CloudProvider>,
}

impl FrameworkConfig {
    /// Fresh document for a new project.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project: ProjectInfo {
                name: project_name.into(),
                version: "0.1.0".into(),
                description: None,
            },
            framework: None,
            cloud: CloudSection::default(),
            services: Vec::new(),
            environments: None,
        }
    }

    pub fn service(&self, name: &str) -> Option<&FrameworkService> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn has_service(&self, name: &str) -> bool {
        self.service(name).is_some()
    }

    /// First service whose name marks it as the authentication backend.
    pub fn auth_service(&self) -> Option<&FrameworkService> {
        self.services
            .iter()
            .find(|s| s.name.contains(AUTH_SERVICE_MARKER))
    }

    /// Port the next listening service receives.
    pub fn next_port(&self) -> Result<u16, DomainError> {
        port_allocator::next_port(&self.services)
    }

    /// Append a service. The new entry must pass the naming rules and must not
    /// clash with an existing name or port.
    pub fn add_service(&mut self, service: FrameworkService) -> Result<(), DomainError> {
        self.check_candidate(&service)?;
        self.services.push(service);
        Ok(())
    }

    /// Check that names and ports are unique across the services list.
    ///
    /// Names are not run through the naming rules here: hand-edited entries
    /// this tool never generated (workers and the like) are kept as they are.
    /// Reports the first violation in list order.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut ports: HashMap<u16, &str> = HashMap::new();

        for service in &self.services {
            if !names.insert(&service.name) {
                return Err(DomainError::DuplicateServiceName {
                    name: service.name.clone(),
                });
            }

            if let Some(port) = service.port {
                if let Some(owner) = ports.insert(port, &service.name) {
                    return Err(DomainError::DuplicatePort {
                        port,
                        owner: owner.into(),
                    });
                }
            }
        }

        Ok(())
    }

    fn check_candidate(&self, candidate: &FrameworkService) -> Result<(), DomainError> {
        check_entry_name(candidate)?;

        if self.has_service(&candidate.name) {
            return Err(DomainError::DuplicateServiceName {
                name: candidate.name.clone(),
            });
        }

        if let Some(port) = candidate.port {
            if let Some(owner) = self.services.iter().find(|s| s.port == Some(port)) {
                return Err(DomainError::DuplicatePort {
                    port,
                    owner: owner.name.clone(),
                });
            }
        }

        Ok(())
    }
}

fn check_entry_name(service: &FrameworkService) -> Result<(), DomainError> {
    validate_service_name(&service.name)?;
    if let Some(kind) = service.kind() {
        require_service_suffix(kind, &service.name)?;
    }
    Ok(())
}
