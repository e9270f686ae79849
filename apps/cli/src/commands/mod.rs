pub mod checkpoints;
pub mod dataset;
pub mod resume;
pub mod train;
pub mod validate;

use crate::prompt::TerminalPrompter;
use roadwatch_pipeline::{AssumeDefaults, Prompter};

/// Pick the prompter for a flow: terminal prompts, or defaults when the
/// operator passed `--yes`.
pub(crate) fn prompter_for(yes: bool) -> Box<dyn Prompter> {
    if yes { Box::new(AssumeDefaults) } else { Box::new(TerminalPrompter) }
}
