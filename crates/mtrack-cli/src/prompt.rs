use mtrack_dal::Confirm;
use tracing::warn;

/// Asks on terminal, unless confirmation was already given on command line
pub struct PromptConfirm {
    assume_yes: bool,
}

impl PromptConfirm {
    pub fn new(assume_yes: bool) -> Self {
        PromptConfirm { assume_yes }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!("Cannot ask for confirmation: {e}");
                false
            })
    }
}
