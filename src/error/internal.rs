use std::num::TryFromIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored BIGINT column could not be converted back into a Discord snowflake.
    ///
    /// Snowflakes are written as `i64` and should always read back as a
    /// non-negative value. A negative value means the row was written by
    /// something other than this bot.
    #[error("Failed to convert stored id {value} into a Discord id: {source}")]
    InvalidStoredId {
        /// The stored value that failed to convert
        value: i64,
        /// The underlying conversion error
        #[source]
        source: TryFromIntError,
    },

    /// The message counting task is no longer running.
    ///
    /// Occurs when the activity tracker's channel is closed, which only happens
    /// if the task panicked or the runtime is shutting down.
    #[error("Activity tracker is not running")]
    ActivityTrackerStopped,
}
