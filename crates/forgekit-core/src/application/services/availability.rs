//! Service name availability.
//!
//! A name is available when it passes the naming rules, is not already in
//! the project document, and has no folder on disk under its workspace
//! directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::{AvailabilityError, ports::Filesystem};
use crate::domain::{FrameworkConfig, ServiceType, validate_service_name};

/// Folder a service of `service_type` named `name` is generated into.
pub fn service_directory(project_root: &Path, service_type: ServiceType, name: &str) -> PathBuf {
    project_root.join(service_type.workspace_dir()).join(name)
}

/// Checks candidate names against the rules, the document, and the disk.
pub struct AvailabilityChecker<'a> {
    config: &'a FrameworkConfig,
    filesystem: &'a dyn Filesystem,
    project_root: &'a Path,
}

impl<'a> AvailabilityChecker<'a> {
    pub fn new(
        config: &'a FrameworkConfig,
        filesystem: &'a dyn Filesystem,
        project_root: &'a Path,
    ) -> Self {
        Self {
            config,
            filesystem,
            project_root,
        }
    }

    pub fn service_dir(&self, service_type: ServiceType, name: &str) -> PathBuf {
        service_directory(self.project_root, service_type, name)
    }

    /// Stops at the first failing check. Neither the document nor the
    /// filesystem is consulted for a name that breaks the naming rules.
    pub fn check(&self, service_type: ServiceType, name: &str) -> Result<(), AvailabilityError> {
        validate_service_name(name)?;

        if self.config.has_service(name) {
            return Err(AvailabilityError::AlreadyRegistered {
                name: name.to_string(),
            });
        }

        let dir = self.service_dir(service_type, name);
        if self.filesystem.exists(&dir) {
            return Err(AvailabilityError::FolderExists {
                name: name.to_string(),
                path: dir,
            });
        }

        debug!(name, dir = %dir.display(), "Service name available");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{FrameworkService, NamingError};
    use mockall::predicate::eq;

    fn config_with(names: &[&str]) -> FrameworkConfig {
        let mut config = FrameworkConfig::new("shop");
        for (i, name) in names.iter().enumerate() {
            config.services.push(FrameworkService::listening(
                *name,
                ServiceType::Spa,
                3000 + i as u16,
            ));
        }
        config
    }

    #[test]
    fn available_name_passes() {
        let config = config_with(&["web"]);
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(PathBuf::from("/proj/apps/dashboard")))
            .times(1)
            .return_const(false);

        let checker = AvailabilityChecker::new(&config, &fs, Path::new("/proj"));
        assert!(checker.check(ServiceType::Spa, "dashboard").is_ok());
    }

    #[test]
    fn invalid_name_never_touches_filesystem() {
        let config = config_with(&[]);
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();

        let checker = AvailabilityChecker::new(&config, &fs, Path::new("/proj"));
        let err = checker.check(ServiceType::Spa, "Web").unwrap_err();
        assert!(matches!(
            err,
            AvailabilityError::Naming(NamingError::UppercaseNotAllowed { .. })
        ));
    }

    #[test]
    fn registered_name_is_rejected_before_disk_check() {
        let config = config_with(&["web"]);
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();

        let checker = AvailabilityChecker::new(&config, &fs, Path::new("/proj"));
        assert_eq!(
            checker.check(ServiceType::Spa, "web"),
            Err(AvailabilityError::AlreadyRegistered { name: "web".into() })
        );
    }

    #[test]
    fn existing_folder_is_rejected() {
        let config = config_with(&[]);
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);

        let checker = AvailabilityChecker::new(&config, &fs, Path::new("/proj"));
        let err = checker
            .check(ServiceType::NestJs, "orders-service")
            .unwrap_err();
        assert_eq!(
            err,
            AvailabilityError::FolderExists {
                name: "orders-service".into(),
                path: PathBuf::from("/proj/services/orders-service"),
            }
        );
    }
}
