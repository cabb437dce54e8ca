//! `forgekit config`: Inspect and create the settings file.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            // Bypasses quiet mode: the TOML is the command's result.
            print!("{}", config.to_toml()?);
        }

        ConfigCommands::Path => {
            println!(
                "{}",
                AppConfig::active_path(global.config.as_deref()).display()
            );
        }

        ConfigCommands::Init { force, path } => {
            let target = path.unwrap_or_else(|| AppConfig::active_path(global.config.as_deref()));
            if write_defaults(&target, force)? {
                output.success(&format!("Configuration created at {}", target.display()))?;
            } else {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    target.display(),
                ))?;
            }
        }
    }

    Ok(())
}

/// Write the default settings; `false` when the file exists and `force` is off.
fn write_defaults(target: &Path, force: bool) -> CliResult<bool> {
    if target.exists() && !force {
        return Ok(false);
    }

    let toml = AppConfig::default().to_toml()?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(target, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", target.display()))?;

    Ok(true)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_defaults_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("forgekit.toml");

        assert!(write_defaults(&target, false).unwrap());
        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.contains("[generators]"));
        assert!(written.contains("interactive = true"));
    }

    #[test]
    fn existing_file_kept_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("forgekit.toml");
        std::fs::write(&target, "# mine\n").unwrap();

        assert!(!write_defaults(&target, false).unwrap());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "# mine\n");

        assert!(write_defaults(&target, true).unwrap());
        assert!(std::fs::read_to_string(&target).unwrap().contains("[output]"));
    }
}
