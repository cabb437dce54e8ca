//! Core domain layer for forgekit.
//!
//! Pure business logic: the name rule engine, the port allocator, and the
//! project document with its invariants. No filesystem, process, or prompt
//! access happens here; those are reached through the ports in
//! `crate::application::ports`.
//!
//! - **No I/O**: every function is deterministic over its inputs
//! - **Serde only at the edges**: the document types derive serde so adapters
//!   can persist them, but nothing here reads or writes files
pub mod entities;
pub mod error;
pub mod naming;
pub mod port_allocator;
pub mod value_objects;

pub use entities::{
    CONFIG_FILE_NAME, CloudSection, FrameworkConfig, FrameworkSection, FrameworkService,
    ProjectInfo,
};

pub use error::{DomainError, ErrorCategory, NamingError};

pub use naming::{
    MAX_NAME_LENGTH, MIN_NAME_LENGTH, RESERVED_INFRA_NAMES, RESERVED_URL_PREFIXES,
    SERVICE_SUFFIX, global_prefix_for, require_service_suffix, strip_service_suffix,
    validate_global_prefix, validate_service_name,
};

pub use port_allocator::{BASE_PORT, next_database_port, next_port};

pub use value_objects::{CloudProvider, DatabaseType, FrameworkTemplate, ServiceType};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn service_type_parses_correctly() {
        assert_eq!(ServiceType::from_str("spa").unwrap(), ServiceType::Spa);
        assert_eq!(ServiceType::from_str("NextJS").unwrap(), ServiceType::NextJs);
        assert_eq!(
            ServiceType::from_str("nextjs-auth").unwrap(),
            ServiceType::NextJsAuth
        );
        assert_eq!(ServiceType::from_str("nest").unwrap(), ServiceType::NestJs);
        assert!(ServiceType::from_str("django").is_err());
    }

    #[test]
    fn service_type_serializes_as_kebab_string() {
        assert_eq!(
            serde_json::to_string(&ServiceType::NextJsAuth).unwrap(),
            "\"nextjs-auth\""
        );
        let parsed: ServiceType = serde_json::from_str("\"nestjs\"").unwrap();
        assert_eq!(parsed, ServiceType::NestJs);
    }

    #[test]
    fn service_type_display_matches_serde() {
        for ty in ServiceType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{ty}\""));
        }
    }

    #[test]
    fn only_nestjs_requires_suffix() {
        let requiring: Vec<_> = ServiceType::ALL
            .into_iter()
            .filter(ServiceType::requires_service_suffix)
            .collect();
        assert_eq!(requiring, vec![ServiceType::NestJs]);
    }

    #[test]
    fn workspace_dirs_split_frontends_and_backends() {
        assert_eq!(ServiceType::Spa.workspace_dir(), "apps");
        assert_eq!(ServiceType::NextJsAuth.workspace_dir(), "apps");
        assert_eq!(ServiceType::NestJs.workspace_dir(), "services");
    }

    #[test]
    fn database_type_aliases() {
        assert_eq!(DatabaseType::from_str("pg").unwrap(), DatabaseType::Postgres);
        assert_eq!(DatabaseType::from_str("mongo").unwrap(), DatabaseType::Mongodb);
        assert!(matches!(
            DatabaseType::from_str("oracle"),
            Err(DomainError::InvalidDatabaseType(_))
        ));
    }

    #[test]
    fn cloud_provider_and_template_parse() {
        assert_eq!(CloudProvider::from_str("AWS").unwrap(), CloudProvider::Aws);
        assert_eq!(
            FrameworkTemplate::from_str("fullstack-auth").unwrap(),
            FrameworkTemplate::FullstackAuth
        );
        assert!(FrameworkTemplate::from_str("blog").is_err());
    }

    #[test]
    fn format_rules_do_not_know_about_the_suffix() {
        assert!(validate_service_name("orders").is_ok());
        assert!(matches!(
            require_service_suffix(ServiceType::NestJs, "orders"),
            Err(DomainError::NestjsSuffixRequired { .. })
        ));
        assert!(require_service_suffix(ServiceType::Spa, "orders").is_ok());
    }

    #[test]
    fn error_suggestions_are_never_empty() {
        let errors = [
            DomainError::from(NamingError::TooShort {
                name: "a".into(),
                length: 1,
                min: MIN_NAME_LENGTH,
            }),
            DomainError::NestjsSuffixRequired {
                name: "orders".into(),
            },
            DomainError::InvalidServiceType("x".into()),
            DomainError::DuplicatePort {
                port: 3000,
                owner: "web".into(),
            },
        ];
        for e in errors {
            assert!(!e.suggestions().is_empty(), "no suggestions for {e}");
        }
    }

    #[test]
    fn reserved_errors_are_policy_category() {
        let e = DomainError::from(validate_service_name("kong").unwrap_err());
        assert_eq!(e.category(), ErrorCategory::Policy);
        let e = DomainError::from(validate_service_name("a").unwrap_err());
        assert_eq!(e.category(), ErrorCategory::Validation);
    }
}
