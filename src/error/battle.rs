//! Errors raised while reading battle boards.

use thiserror::Error;

/// Failure to turn a battle board reference into a roster.
///
/// The URL variants are user-correctable input errors and are replied verbatim. The
/// upstream variants never leave the roster fetcher: they are logged and degraded to
/// an empty roster.
#[derive(Error, Debug)]
pub enum BattleBoardError {
    /// The reference is not a URL at all.
    #[error("Invalid battle board URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL points at a host that is not a supported battle board.
    #[error("Unsupported battle board '{0}'. Use an albionbattles.com or albionbb.com link.")]
    UnsupportedHost(String),

    /// The host is supported but the path is neither a single battle nor a multi-battle page.
    #[error("Unrecognized battle board path '{0}'. Link a battle or a multi-battle page.")]
    UnsupportedPath(String),

    /// A multi-battle URL without any battle IDs in its `ids` parameter.
    #[error("The battle board URL does not contain any battle IDs.")]
    MissingIds,

    /// The battle board API could not be reached or returned an error status.
    #[error("Battle board request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl BattleBoardError {
    /// Whether the error was caused by the user's input rather than the upstream service.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Upstream(_))
    }
}

/// Reason a single role assignment did not go through.
///
/// Recorded per identity; never aborts the rest of the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// The stored Discord account ID cannot address a user.
    #[error("stored Discord ID is invalid")]
    InvalidIdentity,

    /// The member could not be fetched, usually because they left the server.
    #[error("failed to fetch member: {0}")]
    MemberUnavailable(String),

    /// Discord rejected the role change, usually a permission or hierarchy violation.
    #[error("failed to add role: {0}")]
    RoleRejected(String),
}
