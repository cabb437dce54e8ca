//! Terminal prompts for values missing from the command line.

use std::io::IsTerminal as _;

use forgekit_core::application::ports::{NonInteractivePrompter, Prompter};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Dialoguer prompts when interactive use is allowed and stdin is a
/// terminal; otherwise every question fails with a "prompts disabled" error.
pub fn prompter_for(global: &GlobalArgs, config: &AppConfig) -> Box<dyn Prompter> {
    let interactive =
        !global.no_input && config.prompt.interactive && std::io::stdin().is_terminal();

    #[cfg(feature = "interactive")]
    if interactive {
        return Box::new(interactive::DialoguerPrompter::default());
    }

    tracing::debug!(interactive, "Prompts disabled");
    Box::new(NonInteractivePrompter)
}

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Input, Select, theme::ColorfulTheme};

    use forgekit_core::{
        application::{ApplicationError, ports::Prompter},
        error::{ForgeError, ForgeResult},
    };

    #[derive(Default)]
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    fn prompt_failed(err: dialoguer::Error) -> ForgeError {
        ApplicationError::PromptFailed {
            reason: err.to_string(),
        }
        .into()
    }

    impl Prompter for DialoguerPrompter {
        fn select(&self, message: &str, choices: &[&str], default: usize) -> ForgeResult<usize> {
            Select::with_theme(&self.theme)
                .with_prompt(message)
                .items(choices)
                .default(default)
                .interact_opt()
                .map_err(prompt_failed)?
                .ok_or_else(|| ApplicationError::Cancelled.into())
        }

        fn input(
            &self,
            message: &str,
            validate: &dyn Fn(&str) -> Result<(), String>,
        ) -> ForgeResult<String> {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(message)
                .validate_with(|value: &String| validate(value.trim()))
                .interact_text()
                .map(|value| value.trim().to_string())
                .map_err(prompt_failed)
        }
    }
}
