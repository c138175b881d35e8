use crate::error::CliError;

/// Yes/no confirmation source
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool, CliError>;
}

/// Asks on the controlling terminal; refusal is the default answer
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        dialoguer::Confirm::new()
            .with_prompt(question.trim())
            .default(false)
            .interact()
            .map_err(CliError::Prompt)
    }
}
