//! Error types and user-facing error mapping.
//!
//! This module provides the application's error hierarchy and the conversion of those
//! errors into the short ephemeral notices shown to Discord users. The `AppError` enum
//! is the top-level error type returned by services and command handlers; event
//! handlers log it and never propagate it.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Notice shown to callers who fail the staff check.
pub const FORBIDDEN_NOTICE: &str = "⛔ No tienes permisos.";

/// Notice shown to users who run `registrar` a second time.
pub const ALREADY_REGISTERED_NOTICE: &str = "🚫 **YA TE ENCUENTRAS REGISTRADO**";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic conversion. Each variant maps to the message returned by
/// `user_message`, which is what the invoking user sees.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal error indicating a bug or corrupted data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// The database could not be reached at startup.
    ///
    /// The bot keeps running without persistence; every operation that needs storage
    /// returns this variant instead of touching a missing connection.
    #[error("Database connection is not available")]
    DatabaseUnavailable,

    /// The caller tried to register a second time.
    #[error("User is already registered")]
    AlreadyRegistered,

    /// The caller failed the staff check.
    #[error("Caller lacks staff permissions")]
    Forbidden,

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
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
    /// Converts the error into the notice shown to the invoking user.
    ///
    /// Expected failures such as a failed staff check or bad input carry their own
    /// message. Infrastructure failures are logged with full detail and replaced by a
    /// generic notice so driver or API internals never reach the chat.
    ///
    /// # Returns
    /// - `String` - Message to send as an ephemeral interaction response
    pub fn user_message(&self) -> String {
        match self {
            Self::Forbidden => FORBIDDEN_NOTICE.to_string(),
            Self::AlreadyRegistered => ALREADY_REGISTERED_NOTICE.to_string(),
            Self::DatabaseUnavailable => {
                "⚠️ La base de datos no está disponible en este momento.".to_string()
            }
            Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                "❌ Ocurrió un error interno. Inténtalo de nuevo más tarde.".to_string()
            }
        }
    }
}
