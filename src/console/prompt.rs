//! UI prompts the console core needs from its host

/// Blocking yes/no prompt gating destructive operations
pub trait Confirm {
    /// Ask the user; `true` means proceed
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
