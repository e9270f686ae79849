//! Terminal-backed confirmation prompts.

use roadwatch_pipeline::{PipelineError, PipelineResult, Prompter};

/// Asks yes/no questions through the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default_yes: bool) -> PipelineResult<bool> {
        inquire::Confirm::new(message)
            .with_default(default_yes)
            .prompt()
            .map_err(|e| PipelineError::Other(anyhow::Error::new(e)))
    }
}
