//! Runs generator processes with `std::process`.

use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use forgekit_core::application::ports::{CommandSpec, ProcessOutcome, ProcessRunner};

/// Production runner. Generators inherit the terminal so their own
/// progress output and questions reach the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &CommandSpec) -> std::io::Result<ProcessOutcome> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(cwd) = &command.cwd {
            process.current_dir(cwd);
        }

        let status = process.status()?;
        debug!(?status, "Process exited");

        Ok(ProcessOutcome {
            success: status.success(),
            code: status.code(),
        })
    }

    fn probe(&self, program: &str) -> Option<String> {
        let output = Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        Some(version)
    }
}
