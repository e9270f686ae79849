use crate::error::PipelineResult;

/// Interactive confirmation seam.
///
/// Flows ask a single yes/no question before any irreversible step. The CLI
/// backs this with a terminal prompt; tests script the answers.
pub trait Prompter: Send + Sync {
    fn confirm(&self, message: &str, default_yes: bool) -> PipelineResult<bool>;
}

/// Answers every prompt with its default. Used by non-interactive
/// invocations (`--yes`).
#[derive(Debug, Default)]
pub struct AssumeDefaults;

impl Prompter for AssumeDefaults {
    fn confirm(&self, _message: &str, default_yes: bool) -> PipelineResult<bool> {
        Ok(default_yes)
    }
}
