//! Message count factory for seeding leaderboards.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating leaderboard rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message_count::MessageCountFactory;
///
/// let row = MessageCountFactory::new(&db, guild_id)
///     .user_id(42)
///     .counted(7)
///     .build()
///     .await?;
/// ```
pub struct MessageCountFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    counted: i32,
    updated_at: NaiveDateTime,
}

impl<'a> MessageCountFactory<'a> {
    /// Creates a new MessageCountFactory for a guild.
    ///
    /// Defaults:
    /// - user_id: auto-incremented
    /// - counted: `1`
    /// - updated_at: now
    pub fn new(db: &'a DatabaseConnection, guild_id: u64) -> Self {
        Self {
            db,
            guild_id: guild_id as i64,
            user_id: next_id() as i64,
            counted: 1,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id as i64;
        self
    }

    pub fn counted(mut self, counted: i32) -> Self {
        self.counted = counted;
        self
    }

    pub fn updated_at(mut self, updated_at: NaiveDateTime) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message_count::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message_count::Model, DbErr> {
        entity::message_count::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            counted: ActiveValue::Set(self.counted),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a leaderboard row for `user_id` with `counted` points.
pub async fn create_message_count(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
    counted: i32,
) -> Result<entity::message_count::Model, DbErr> {
    MessageCountFactory::new(db, guild_id)
        .user_id(user_id)
        .counted(counted)
        .build()
        .await
}
