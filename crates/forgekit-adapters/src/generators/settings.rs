use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use forgekit_core::application::services::{Tool, prerequisite_service::NPM};

/// Package manager the generated projects are set up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

const PNPM: Tool = Tool {
    name: "pnpm",
    purpose: "installs dependencies of generated projects",
    install_hint: "Run: npm install -g pnpm",
    required: true,
};

const YARN: Tool = Tool {
    name: "yarn",
    purpose: "installs dependencies of generated projects",
    install_hint: "Run: npm install -g yarn",
    required: true,
};

impl PackageManager {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }

    pub const fn tool(&self) -> Tool {
        match self {
            Self::Npm => NPM,
            Self::Pnpm => PNPM,
            Self::Yarn => YARN,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            other => Err(format!(
                "unknown package manager '{other}' (expected npm, pnpm or yarn)"
            )),
        }
    }
}

/// Versions and options handed to the upstream generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub package_manager: PackageManager,
    /// Vite template, e.g. `react-ts` or `vue-ts`.
    pub spa_template: String,
    /// `create-next-app` version tag.
    pub nextjs_version: String,
    /// `@nestjs/cli` version tag.
    pub nestjs_cli_version: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::Npm,
            spa_template: "react-ts".into(),
            nextjs_version: "latest".into(),
            nestjs_cli_version: "latest".into(),
        }
    }
}
