//! The yes/no prompt that gates a reset.

/// Question asked before the sheet and roster are wiped.
pub const RESET_PROMPT: &str = "Reset the whole adventure sheet?";

/// Asks the user a yes/no question and blocks for the answer.
pub trait Confirm {
    /// Returns true if the user agreed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
