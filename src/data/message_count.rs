//! Message count data repository.
//!
//! This module provides the `MessageCountRepository` backing the activity leaderboard.
//! Points are only ever added through an atomic upsert so concurrent flushes for the
//! same user cannot lose increments.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, ExprTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{error::AppError, model::message_count::MessageCount, util::parse::id_to_db};

/// Repository providing database operations for per-guild message counts.
pub struct MessageCountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageCountRepository<'a> {
    /// Creates a new MessageCountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MessageCountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds points to a user's count in a guild.
    ///
    /// Creates the row with `points` if the user has none yet, otherwise increments
    /// `counted` in place and refreshes `updated_at`.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `points` - Number of points to add
    ///
    /// # Returns
    /// - `Ok(())` - Points added
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn add_points(&self, guild_id: u64, user_id: u64, points: i32) -> Result<(), AppError> {
        let now = Utc::now().naive_utc();

        entity::prelude::MessageCount::insert(entity::message_count::ActiveModel {
            guild_id: ActiveValue::Set(id_to_db(guild_id)),
            user_id: ActiveValue::Set(id_to_db(user_id)),
            counted: ActiveValue::Set(points),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::message_count::Column::GuildId,
                entity::message_count::Column::UserId,
            ])
            .value(
                entity::message_count::Column::Counted,
                Expr::col((
                    entity::prelude::MessageCount,
                    entity::message_count::Column::Counted,
                ))
                .add(points),
            )
            .update_column(entity::message_count::Column::UpdatedAt)
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Gets a slice of the guild leaderboard.
    ///
    /// Rows are ordered by points descending; ties go to the user who scored most recently.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `limit` - Maximum number of rows to return
    /// - `offset` - Number of rows to skip
    ///
    /// # Returns
    /// - `Ok(Vec<MessageCount>)` - Rows for the requested window
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_leaderboard(
        &self,
        guild_id: u64,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<MessageCount>, AppError> {
        let entities = entity::prelude::MessageCount::find()
            .filter(entity::message_count::Column::GuildId.eq(id_to_db(guild_id)))
            .order_by_desc(entity::message_count::Column::Counted)
            .order_by_desc(entity::message_count::Column::UpdatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        entities.into_iter().map(MessageCount::from_entity).collect()
    }

    /// Counts the users with points in a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of leaderboard rows
    /// - `Err(AppError::DbErr)` - Database error during count
    pub async fn count_by_guild(&self, guild_id: u64) -> Result<u64, AppError> {
        let total = entity::prelude::MessageCount::find()
            .filter(entity::message_count::Column::GuildId.eq(id_to_db(guild_id)))
            .count(self.db)
            .await?;

        Ok(total)
    }

    /// Finds the count of one user in a guild.
    ///
    /// # Returns
    /// - `Ok(Some(MessageCount))` - The user has points
    /// - `Ok(None)` - The user has no row in this guild
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<MessageCount>, AppError> {
        let entity =
            entity::prelude::MessageCount::find_by_id((id_to_db(guild_id), id_to_db(user_id)))
                .one(self.db)
                .await?;

        entity.map(MessageCount::from_entity).transpose()
    }

    /// Deletes every count of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn reset_guild(&self, guild_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::MessageCount::delete_many()
            .filter(entity::message_count::Column::GuildId.eq(id_to_db(guild_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the count of one user in a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The user's row was deleted
    /// - `Ok(false)` - The user had no points
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn reset_user(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::MessageCount::delete_many()
            .filter(entity::message_count::Column::GuildId.eq(id_to_db(guild_id)))
            .filter(entity::message_count::Column::UserId.eq(id_to_db(user_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
