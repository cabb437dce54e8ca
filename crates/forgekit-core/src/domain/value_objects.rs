//! Domain value objects: ServiceType, DatabaseType, CloudProvider, FrameworkTemplate.
//!
//! Pure value types: `Copy`, equality-by-value, serde representation equal to
//! the strings stored in `forgekit.json`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ServiceType ──────────────────────────────────────────────────────────────

/// The kind of service a generator flow scaffolds.
///
/// Closed set: adding a variant forces every `match` in the router to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "spa")]
    Spa,
    #[serde(rename = "nextjs")]
    NextJs,
    #[serde(rename = "nextjs-auth")]
    NextJsAuth,
    #[serde(rename = "nestjs")]
    NestJs,
}

impl ServiceType {
    /// Every type, in the order the selection prompt shows them.
    pub const ALL: [ServiceType; 4] = [Self::Spa, Self::NextJs, Self::NextJsAuth, Self::NestJs];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spa => "spa",
            Self::NextJs => "nextjs",
            Self::NextJsAuth => "nextjs-auth",
            Self::NestJs => "nestjs",
        }
    }

    /// Label used by the interactive type selector.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Spa => "SPA (React + Vite)",
            Self::NextJs => "Next.js app",
            Self::NextJsAuth => "Next.js app with authentication",
            Self::NestJs => "NestJS service",
        }
    }

    /// Workspace directory the service is generated into.
    pub const fn workspace_dir(&self) -> &'static str {
        match self {
            Self::Spa | Self::NextJs | Self::NextJsAuth => "apps",
            Self::NestJs => "services",
        }
    }

    pub const fn requires_service_suffix(&self) -> bool {
        matches!(self, Self::NestJs)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spa" => Ok(Self::Spa),
            "nextjs" | "next" => Ok(Self::NextJs),
            "nextjs-auth" | "next-auth" => Ok(Self::NextJsAuth),
            "nestjs" | "nest" => Ok(Self::NestJs),
            other => Err(DomainError::InvalidServiceType(other.into())),
        }
    }
}

// ── DatabaseType ─────────────────────────────────────────────────────────────

/// Database engines a backend service can be provisioned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Postgres,
    Mysql,
    Mongodb,
}

impl DatabaseType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Mongodb => "mongodb",
        }
    }

    /// First host port handed out for this engine.
    pub const fn base_port(&self) -> u16 {
        match self {
            Self::Postgres => 5432,
            Self::Mysql => 3306,
            Self::Mongodb => 27017,
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            "mongodb" | "mongo" => Ok(Self::Mongodb),
            other => Err(DomainError::InvalidDatabaseType(other.into())),
        }
    }
}

// ── CloudProvider ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Gcp,
    Aws,
    Azure,
}

impl CloudProvider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gcp => "gcp",
            Self::Aws => "aws",
            Self::Azure => "azure",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gcp" | "google" => Ok(Self::Gcp),
            "aws" | "amazon" => Ok(Self::Aws),
            "azure" => Ok(Self::Azure),
            other => Err(DomainError::InvalidCloudProvider(other.into())),
        }
    }
}

// ── FrameworkTemplate ────────────────────────────────────────────────────────

/// Project-wide template the workspace was initialised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkTemplate {
    FullstackAuth,
    Auth,
}

impl FrameworkTemplate {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullstackAuth => "fullstack-auth",
            Self::Auth => "auth",
        }
    }
}

impl fmt::Display for FrameworkTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fullstack-auth" => Ok(Self::FullstackAuth),
            "auth" => Ok(Self::Auth),
            other => Err(DomainError::InvalidTemplate(other.into())),
        }
    }
}
