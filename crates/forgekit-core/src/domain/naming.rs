//! Name rule engine.
//!
//! Service and project names pass through a fixed, ordered list of rules.
//! The **first** rule that fires decides the reported [`NamingError`]; errors
//! are never accumulated. Rule order is part of the contract because each rule
//! carries a different message, so `-foo` reports a bad first character rather
//! than a hyphen boundary.
//!
//! | # | Rule                                   | Error                  |
//! |---|----------------------------------------|------------------------|
//! | 1 | no uppercase letters                   | `UppercaseNotAllowed`  |
//! | 2 | only `[a-z0-9-]`                       | `InvalidCharacters`    |
//! | 3 | starts with a lowercase letter         | `MustStartWithLetter`  |
//! | 4 | no leading or trailing hyphen          | `HyphenBoundary`       |
//! | 5 | not a reserved infrastructure name     | `ReservedName`         |
//! | 6 | no `-db` suffix                        | `ReservedDbSuffix`     |
//! | 7 | at least 2 characters                  | `TooShort`             |
//! | 8 | at most 40 characters                  | `TooLong`              |
//!
//! Rules 5 and 6 look at the name with an optional trailing `-service`
//! removed, so `redis-service` is as reserved as `redis`.
//!
//! Everything here is pure: no I/O, no allocation beyond the error value.

use crate::domain::{
    error::{DomainError, NamingError},
    value_objects::ServiceType,
};

/// Infrastructure containers that services may not shadow.
pub const RESERVED_INFRA_NAMES: &[&str] = &[
    "gateway",
    "kong",
    "redis",
    "postgres",
    "postgresql",
    "mysql",
    "mongodb",
];

/// URL prefixes owned by the gateway and tooling.
pub const RESERVED_URL_PREFIXES: &[&str] = &[
    "api",
    "admin",
    "health",
    "metrics",
    "docs",
    "swagger",
    "graphql",
    "websocket",
    "ws",
    "public",
    "static",
    "assets",
];

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 40;

/// Suffix every NestJS service name must carry.
pub const SERVICE_SUFFIX: &str = "-service";

const DB_SUFFIX: &str = "-db";

/// Validate a service or project name.
pub fn validate_service_name(name: &str) -> Result<(), NamingError> {
    check_format(name)?;

    let base = strip_service_suffix(name);

    if RESERVED_INFRA_NAMES.contains(&base) {
        return Err(NamingError::ReservedName { name: name.into() });
    }

    if let Some(stem) = base.strip_suffix(DB_SUFFIX) {
        return Err(NamingError::ReservedDbSuffix {
            name: name.into(),
            suggestion: format!("{stem}{SERVICE_SUFFIX}"),
        });
    }

    let length = name.chars().count();
    if length < MIN_NAME_LENGTH {
        return Err(NamingError::TooShort {
            name: name.into(),
            length,
            min: MIN_NAME_LENGTH,
        });
    }
    if length > MAX_NAME_LENGTH {
        return Err(NamingError::TooLong {
            length,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validate a NestJS global route prefix.
///
/// Shares the four format rules with [`validate_service_name`], then checks
/// the prefix against [`RESERVED_URL_PREFIXES`].
pub fn validate_global_prefix(prefix: &str) -> Result<(), NamingError> {
    check_format(prefix)?;

    if RESERVED_URL_PREFIXES.contains(&prefix) {
        return Err(NamingError::ReservedPrefix {
            prefix: prefix.into(),
        });
    }

    Ok(())
}

/// Enforce the type-specific suffix rule (`nestjs` names end in `-service`).
pub fn require_service_suffix(service_type: ServiceType, name: &str) -> Result<(), DomainError> {
    if service_type.requires_service_suffix() && !name.ends_with(SERVICE_SUFFIX) {
        return Err(DomainError::NestjsSuffixRequired { name: name.into() });
    }
    Ok(())
}

/// `orders-service` → `orders`; anything else is returned unchanged.
pub fn strip_service_suffix(name: &str) -> &str {
    name.strip_suffix(SERVICE_SUFFIX).unwrap_or(name)
}

/// Route prefix for a NestJS service: the name without `-service`, or the
/// full name when the short form is a reserved URL prefix.
pub fn global_prefix_for(name: &str) -> String {
    let stem = strip_service_suffix(name);
    match validate_global_prefix(stem) {
        Ok(()) => stem.to_string(),
        Err(_) => name.to_string(),
    }
}

/// Rules 1-4, shared by names and prefixes.
fn check_format(value: &str) -> Result<(), NamingError> {
    if value.chars().any(char::is_uppercase) {
        return Err(NamingError::UppercaseNotAllowed { name: value.into() });
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(NamingError::InvalidCharacters {
            name: value.into(),
            underscore: value.contains('_'),
        });
    }

    if !value.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(NamingError::MustStartWithLetter { name: value.into() });
    }

    if value.starts_with('-') || value.ends_with('-') {
        return Err(NamingError::HyphenBoundary { name: value.into() });
    }

    Ok(())
}
