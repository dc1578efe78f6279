//! Error types and reply handling.
//!
//! This module provides the application's error hierarchy and the conversion of errors
//! into chat replies. `AppError` is the top-level error type that wraps domain-specific
//! errors; `AppError::to_reply` plays the role an HTTP response mapping would, turning an
//! error into text that is safe to show to the invoking user.

pub mod battle;
pub mod config;
pub mod internal;
pub mod permission;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{
    battle::BattleBoardError, config::ConfigError, internal::InternalError,
    permission::PermissionError,
};

/// Generic reply used whenever an error's details must stay server-side.
const GENERIC_ERROR_REPLY: &str = "Something went wrong while running that command.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. User-correctable errors carry their
/// own message, while infrastructure errors are logged and hidden behind a generic reply.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Malformed or unsupported battle board reference, or a battle board request failure.
    #[error(transparent)]
    BattleBoardErr(#[from] BattleBoardError),

    /// Caller or bot lacks the permissions a command needs.
    #[error(transparent)]
    PermissionErr(#[from] PermissionError),

    /// Unexpected internal state such as an unparseable stored ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when the game-info API cannot be reached or returns malformed data.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Resource not found error, shown to the user verbatim.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, shown to the user verbatim.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the text replied to the invoking user.
    ///
    /// User-correctable errors (bad input, missing permissions, unknown resources) are
    /// returned verbatim. Everything else is logged with full details and replaced by a
    /// generic message to avoid leaking implementation details into the channel.
    ///
    /// # Returns
    /// - `String` - Reply text for the chat channel
    pub fn to_reply(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::PermissionErr(err) => err.to_string(),
            Self::BattleBoardErr(err) if err.is_input_error() => err.to_string(),
            err => {
                tracing::error!("{}", err);
                GENERIC_ERROR_REPLY.to_string()
            }
        }
    }
}
