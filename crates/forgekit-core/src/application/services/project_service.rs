//! Project Service - creating and reading the project document.

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{
        CloudProvider, DomainError, FrameworkConfig, FrameworkSection, FrameworkService,
        FrameworkTemplate, validate_service_name,
    },
    error::ForgeResult,
};

/// Input for [`ProjectService::init`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitProjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub cloud: Option<CloudProvider>,
    pub template: Option<FrameworkTemplate>,
    /// Replace an existing document.
    pub force: bool,
}

pub struct ProjectService {
    store: Box<dyn ConfigStore>,
}

impl ProjectService {
    pub fn new(store: Box<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Write a fresh document. The project name follows the service naming
    /// rules so it can double as a database and container prefix.
    #[instrument(skip_all, fields(name = %request.name, force = request.force))]
    pub fn init(&self, request: InitProjectRequest) -> ForgeResult<FrameworkConfig> {
        validate_service_name(&request.name).map_err(DomainError::from)?;

        if self.store.exists() && !request.force {
            return Err(ApplicationError::ConfigExists {
                path: self.store.location(),
            }
            .into());
        }

        let mut config = FrameworkConfig::new(request.name);
        config.project.description = request.description;
        config.cloud.provider = request.cloud;
        config.framework = request.template.map(|template| FrameworkSection {
            template: Some(template),
            ..FrameworkSection::default()
        });

        self.store.save(&config)?;
        info!(path = %self.store.location().display(), "Project initialised");
        Ok(config)
    }

    pub fn load(&self) -> ForgeResult<FrameworkConfig> {
        self.store.load()
    }

    /// Services in document order.
    pub fn list_services(&self) -> ForgeResult<Vec<FrameworkService>> {
        Ok(self.store.load()?.services)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ports::MockConfigStore;
    use crate::error::ForgeError;

    fn store(exists: bool) -> MockConfigStore {
        let mut store = MockConfigStore::new();
        store.expect_exists().return_const(exists);
        store
            .expect_location()
            .return_const(PathBuf::from("/proj/forgekit.json"));
        store
    }

    #[test]
    fn init_writes_fresh_document() {
        let mut store = store(false);
        store
            .expect_save()
            .withf(|config| {
                config.project.name == "shop"
                    && config.cloud.provider == Some(CloudProvider::Gcp)
                    && config
                        .framework
                        .as_ref()
                        .and_then(|f| f.template)
                        == Some(FrameworkTemplate::Auth)
                    && config.services.is_empty()
            })
            .times(1)
            .returning(|_| Ok(()));

        let config = ProjectService::new(Box::new(store))
            .init(InitProjectRequest {
                name: "shop".into(),
                cloud: Some(CloudProvider::Gcp),
                template: Some(FrameworkTemplate::Auth),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.project.version, "0.1.0");
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let mut store = store(true);
        store.expect_save().never();

        let err = ProjectService::new(Box::new(store))
            .init(InitProjectRequest {
                name: "shop".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::ConfigExists { .. })
        ));
    }

    #[test]
    fn init_with_force_overwrites() {
        let mut store = store(true);
        store.expect_save().times(1).returning(|_| Ok(()));

        let result = ProjectService::new(Box::new(store)).init(InitProjectRequest {
            name: "shop".into(),
            force: true,
            ..Default::default()
        });
        assert!(result.is_ok());
    }

    #[test]
    fn init_validates_project_name() {
        let mut store = store(false);
        store.expect_save().never();

        let err = ProjectService::new(Box::new(store))
            .init(InitProjectRequest {
                name: "My_Shop".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ForgeError::Domain(_)));
    }
}
