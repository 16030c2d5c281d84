//! Domain models for the per-guild activity leaderboard.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::id_from_db};

/// Persisted activity points of one user in one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCount {
    /// Discord guild ID.
    pub guild_id: u64,
    /// Discord user ID.
    pub user_id: u64,
    /// Number of flushed points; one point per four counted messages.
    pub counted: i32,
    /// Timestamp of the last flush, used as the leaderboard tie-breaker.
    pub updated_at: DateTime<Utc>,
}

impl MessageCount {
    /// Converts an entity model to a message count domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(MessageCount)` - The converted message count
    /// - `Err(AppError::InternalErr(InvalidStoredId))` - Stored guild or user id is negative
    pub fn from_entity(entity: entity::message_count::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: id_from_db(entity.guild_id)?,
            user_id: id_from_db(entity.user_id)?,
            counted: entity.counted,
            updated_at: entity.updated_at.and_utc(),
        })
    }
}

/// Ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// One-based position across all pages.
    pub rank: u64,
    /// Discord user ID.
    pub user_id: u64,
    /// Points of the user.
    pub counted: i32,
}

/// One page of the leaderboard together with the data needed to render navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardPage {
    /// Entries on this page, already ranked.
    pub entries: Vec<LeaderboardEntry>,
    /// Zero-indexed page number after clamping.
    pub page: u64,
    /// Total number of users with points in the guild.
    pub total: u64,
}
