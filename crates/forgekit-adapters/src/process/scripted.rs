//! Process runner double that never spawns anything.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use forgekit_core::application::ports::{CommandSpec, ProcessOutcome, ProcessRunner};

type RunHook = dyn Fn(&CommandSpec) + Send + Sync;

/// Records every command and answers with a fixed exit status.
///
/// A hook can stand in for the generator's side effects, e.g. writing the
/// files a real `create-next-app` would produce.
#[derive(Clone)]
pub struct ScriptedProcessRunner {
    installed: BTreeSet<String>,
    exit_code: i32,
    hook: Option<Arc<RunHook>>,
    history: Arc<Mutex<Vec<CommandSpec>>>,
}

impl ScriptedProcessRunner {
    /// Every tool installed, every command succeeds.
    pub fn succeeding() -> Self {
        Self {
            installed: ["node", "npm", "npx", "pnpm", "yarn", "git", "docker"]
                .into_iter()
                .map(String::from)
                .collect(),
            exit_code: 0,
            hook: None,
            history: Arc::default(),
        }
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Only these tools answer `--version`.
    pub fn with_installed<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.installed = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn on_run(mut self, hook: impl Fn(&CommandSpec) + Send + Sync + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Commands run so far, in order.
    pub fn history(&self) -> Vec<CommandSpec> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }
}

impl std::fmt::Debug for ScriptedProcessRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedProcessRunner")
            .field("installed", &self.installed)
            .field("exit_code", &self.exit_code)
            .finish_non_exhaustive()
    }
}

impl ProcessRunner for ScriptedProcessRunner {
    fn run(&self, command: &CommandSpec) -> std::io::Result<ProcessOutcome> {
        if let Ok(mut history) = self.history.lock() {
            history.push(command.clone());
        }
        if !self.installed.contains(&command.program) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", command.program),
            ));
        }
        if self.exit_code == 0 {
            if let Some(hook) = &self.hook {
                hook(command);
            }
        }
        Ok(ProcessOutcome {
            success: self.exit_code == 0,
            code: Some(self.exit_code),
        })
    }

    fn probe(&self, program: &str) -> Option<String> {
        self.installed
            .contains(program)
            .then(|| format!("{program} 0.0.0-test"))
    }
}
