// ============================================================================
// domain/error.rs - NAMING AND DOCUMENT INVARIANT ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::naming::{
    MAX_NAME_LENGTH, MIN_NAME_LENGTH, RESERVED_INFRA_NAMES, RESERVED_URL_PREFIXES,
};

/// A name rejected by the rule engine.
///
/// Exactly one variant is produced per validation: the first rule that fires.
/// All variants are cloneable and comparable so the prompt adapter and tests
/// can inspect them without consuming.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("Name '{name}' contains uppercase letters; names must be lowercase")]
    UppercaseNotAllowed { name: String },

    #[error("{}", invalid_characters_message(.name, .underscore))]
    InvalidCharacters { name: String, underscore: bool },

    #[error("Name '{name}' must start with a lowercase letter")]
    MustStartWithLetter { name: String },

    #[error("Name '{name}' cannot start or end with a hyphen")]
    HyphenBoundary { name: String },

    #[error(
        "Name '{name}' is reserved for infrastructure. Reserved names: {}",
        RESERVED_INFRA_NAMES.join(", ")
    )]
    ReservedName { name: String },

    #[error(
        "Name '{name}' cannot end with '-db' (reserved for database containers). Use '{suggestion}' instead"
    )]
    ReservedDbSuffix { name: String, suggestion: String },

    #[error("Name '{name}' is too short ({length} characters, minimum is {min})")]
    TooShort {
        name: String,
        length: usize,
        min: usize,
    },

    #[error(
        "Name is too long ({length} characters, maximum is {max}) so derived PostgreSQL identifiers stay within the database's length limit"
    )]
    TooLong { length: usize, max: usize },

    #[error(
        "Global prefix '{prefix}' is reserved. Reserved prefixes: {}",
        RESERVED_URL_PREFIXES.join(", ")
    )]
    ReservedPrefix { prefix: String },
}

fn invalid_characters_message(name: &str, underscore: &bool) -> String {
    if *underscore {
        format!("Name '{name}' contains underscores; use hyphens to separate words")
    } else {
        format!(
            "Name '{name}' contains invalid characters; only lowercase letters, digits and hyphens are allowed"
        )
    }
}

impl NamingError {
    /// User-actionable hints for fixing the name.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UppercaseNotAllowed { name } => vec![
                "Use lowercase letters only".into(),
                format!("Try: {}", name.to_lowercase()),
            ],
            Self::InvalidCharacters {
                name,
                underscore: true,
            } => vec![format!("Try: {}", name.replace('_', "-"))],
            Self::InvalidCharacters { .. } => {
                vec!["Allowed characters: a-z, 0-9 and '-'".into()]
            }
            Self::MustStartWithLetter { .. } => {
                vec!["Begin the name with a letter, e.g. 'web-app' instead of '1-app'".into()]
            }
            Self::HyphenBoundary { name } => {
                vec![format!("Try: {}", name.trim_matches('-'))]
            }
            Self::ReservedName { .. } => vec![
                "Reserved names collide with infrastructure containers".into(),
                "Choose a name that describes the service's domain, e.g. 'orders-service'".into(),
            ],
            Self::ReservedDbSuffix { suggestion, .. } => vec![format!("Try: {suggestion}")],
            Self::TooShort { .. } => {
                vec![format!("Use at least {MIN_NAME_LENGTH} characters")]
            }
            Self::TooLong { .. } => {
                vec![format!("Shorten the name to {MAX_NAME_LENGTH} characters or fewer")]
            }
            Self::ReservedPrefix { .. } => {
                vec!["Choose a domain-specific prefix such as 'orders'".into()]
            }
        }
    }

    /// Whether the failure is a policy violation rather than a format one.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ReservedName { .. } | Self::ReservedDbSuffix { .. } | Self::ReservedPrefix { .. } => {
                ErrorCategory::Policy
            }
            _ => ErrorCategory::Validation,
        }
    }
}

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Naming
    // ========================================================================
    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error("NestJS service names must end with -service")]
    NestjsSuffixRequired { name: String },

    // ========================================================================
    // Document invariants
    // ========================================================================
    #[error("Service '{name}' is already registered in the project")]
    DuplicateServiceName { name: String },

    #[error("Port {port} is already assigned to service '{owner}'")]
    DuplicatePort { port: u16, owner: String },

    #[error("No port left to allocate: service '{owner}' already holds port {highest}")]
    PortsExhausted { highest: u16, owner: String },

    // ========================================================================
    // Parsing
    // ========================================================================
    #[error("Unknown service type '{0}'")]
    InvalidServiceType(String),

    #[error("Unknown database type '{0}'")]
    InvalidDatabaseType(String),

    #[error("Unknown cloud provider '{0}'")]
    InvalidCloudProvider(String),

    #[error("Unknown framework template '{0}'")]
    InvalidTemplate(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Naming(e) => e.suggestions(),
            Self::NestjsSuffixRequired { name } => vec![format!("Try: {name}-service")],
            Self::DuplicateServiceName { name } => vec![
                format!("'{name}' already appears in the services list"),
                "Choose a different name".into(),
            ],
            Self::DuplicatePort { port, .. } => vec![
                format!("Port {port} is taken"),
                "Edit the services list so every port is unique".into(),
            ],
            Self::PortsExhausted { owner, .. } => vec![
                format!("Move '{owner}' to a lower port in forgekit.json"),
            ],
            Self::InvalidServiceType(_) => {
                vec!["Supported types: spa, nextjs, nextjs-auth, nestjs".into()]
            }
            Self::InvalidDatabaseType(_) => {
                vec!["Supported databases: postgres, mysql, mongodb".into()]
            }
            Self::InvalidCloudProvider(_) => vec!["Supported providers: gcp, aws, azure".into()],
            Self::InvalidTemplate(_) => vec!["Supported templates: auth, fullstack-auth".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Naming(e) => e.category(),
            Self::NestjsSuffixRequired { .. } => ErrorCategory::Policy,
            Self::DuplicateServiceName { .. }
            | Self::DuplicatePort { .. }
            | Self::PortsExhausted { .. } => ErrorCategory::Conflict,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Policy,
    Conflict,
}
