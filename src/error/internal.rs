use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored Discord ID is zero and cannot address anything.
    ///
    /// Results in a generic reply to the user.
    #[error("Stored {kind} ID is zero")]
    ZeroId {
        /// What the ID was meant to address, e.g. "role"
        kind: &'static str,
    },
}
