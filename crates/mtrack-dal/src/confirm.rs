pub const DELETE_PROMPT: &str = "Delete this item?";
pub const IMPORT_PROMPT: &str = "Current data will be replaced by this backup. Continue?";

/// Asks user to approve destructive operation
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
