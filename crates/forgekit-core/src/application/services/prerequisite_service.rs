//! Tooling prerequisites for the generator flows.
//!
//! Required tools block generation; optional ones only produce warnings.

use tracing::{debug, warn};

use crate::application::{GenerationError, PrerequisiteWarning, ports::ProcessRunner};

/// An external program forgekit may shell out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub purpose: &'static str,
    pub install_hint: &'static str,
    pub required: bool,
}

pub const NODE: Tool = Tool {
    name: "node",
    purpose: "runs every generator",
    install_hint: "Install Node.js 18 or newer from https://nodejs.org",
    required: true,
};

pub const NPM: Tool = Tool {
    name: "npm",
    purpose: "creates Vite single-page apps",
    install_hint: "npm ships with Node.js; reinstall Node.js from https://nodejs.org",
    required: true,
};

pub const NPX: Tool = Tool {
    name: "npx",
    purpose: "runs create-next-app and the Nest CLI",
    install_hint: "npx ships with npm 7+; run: npm install -g npm",
    required: true,
};

pub const GIT: Tool = Tool {
    name: "git",
    purpose: "generators initialise repositories",
    install_hint: "Install git from https://git-scm.com",
    required: false,
};

pub const DOCKER: Tool = Tool {
    name: "docker",
    purpose: "runs service databases locally",
    install_hint: "Install Docker from https://docs.docker.com/get-docker",
    required: false,
};

/// Everything `forgekit doctor` looks for.
pub const ALL_TOOLS: &[Tool] = &[NODE, NPM, NPX, GIT, DOCKER];

/// Result of probing one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub tool: Tool,
    pub version: Option<String>,
}

impl ToolStatus {
    pub fn is_found(&self) -> bool {
        self.version.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteReport {
    pub statuses: Vec<ToolStatus>,
}

impl PrerequisiteReport {
    /// First required tool that was not found.
    pub fn first_missing(&self) -> Option<&Tool> {
        self.statuses
            .iter()
            .find(|s| s.tool.required && !s.is_found())
            .map(|s| &s.tool)
    }

    pub fn warnings(&self) -> Vec<PrerequisiteWarning> {
        self.statuses
            .iter()
            .filter(|s| !s.tool.required && !s.is_found())
            .map(|s| PrerequisiteWarning {
                tool: s.tool.name.to_string(),
                purpose: s.tool.purpose.to_string(),
            })
            .collect()
    }

    pub fn is_ready(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Fail with the first missing required tool.
    pub fn require(&self) -> Result<(), GenerationError> {
        match self.first_missing() {
            Some(tool) => Err(GenerationError::PrerequisiteMissing {
                tool: tool.name.to_string(),
                install_hint: tool.install_hint.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Probes tools through the process runner.
pub struct PrerequisiteChecker<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> PrerequisiteChecker<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    pub fn inspect(&self, tools: &[Tool]) -> PrerequisiteReport {
        let statuses = tools
            .iter()
            .map(|tool| {
                let version = self.runner.probe(tool.name);
                debug!(tool = tool.name, version = ?version, "Probed tool");
                ToolStatus {
                    tool: *tool,
                    version,
                }
            })
            .collect();
        PrerequisiteReport { statuses }
    }

    /// Check before a generator runs.
    ///
    /// Optional tools that are missing are logged and returned.
    pub fn ensure(&self, tools: &[Tool]) -> Result<Vec<PrerequisiteWarning>, GenerationError> {
        let report = self.inspect(tools);

        if let Some(tool) = report.first_missing() {
            return Err(GenerationError::PrerequisiteMissing {
                tool: tool.name.to_string(),
                install_hint: tool.install_hint.to_string(),
            });
        }

        let warnings = report.warnings();
        for warning in &warnings {
            warn!(tool = %warning.tool, "{warning}");
        }
        Ok(warnings)
    }
}
