//! Permitted channel data repository.
//!
//! This module provides the `PermittedChannelRepository` for the per-guild allow-list of
//! channels whose messages count towards the leaderboard. Presence of a row is the only
//! state; there is nothing to update.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{error::AppError, model::permitted_channel::PermittedChannel, util::parse::id_to_db};

/// Repository providing database operations for the channel allow-list.
pub struct PermittedChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermittedChannelRepository<'a> {
    /// Creates a new PermittedChannelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PermittedChannelRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a channel to the guild's allow-list.
    ///
    /// Permitting a channel twice is a no-op.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Discord channel ID
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was added
    /// - `Ok(false)` - The channel was already permitted
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn permit(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        if self.is_permitted(guild_id, channel_id).await? {
            return Ok(false);
        }

        let result =
            entity::prelude::PermittedChannel::insert(entity::permitted_channel::ActiveModel {
                guild_id: ActiveValue::Set(id_to_db(guild_id)),
                channel_id: ActiveValue::Set(id_to_db(channel_id)),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::permitted_channel::Column::GuildId,
                    entity::permitted_channel::Column::ChannelId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => Ok(true),
            // Lost a race with a concurrent permit of the same channel
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a channel from the guild's allow-list.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Discord channel ID
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was removed
    /// - `Ok(false)` - The channel was not permitted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn unpermit(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::PermittedChannel::delete_many()
            .filter(entity::permitted_channel::Column::GuildId.eq(id_to_db(guild_id)))
            .filter(entity::permitted_channel::Column::ChannelId.eq(id_to_db(channel_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether messages in a channel are counted.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Discord channel ID
    ///
    /// # Returns
    /// - `Ok(true)` - The channel is on the guild's allow-list
    /// - `Ok(false)` - The channel is not permitted
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn is_permitted(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        let entity =
            entity::prelude::PermittedChannel::find_by_id((id_to_db(guild_id), id_to_db(channel_id)))
                .one(self.db)
                .await?;

        Ok(entity.is_some())
    }

    /// Gets every permitted channel of a guild, ordered by channel id.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Vec<PermittedChannel>)` - Permitted channels (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<PermittedChannel>, AppError> {
        let entities = entity::prelude::PermittedChannel::find()
            .filter(entity::permitted_channel::Column::GuildId.eq(id_to_db(guild_id)))
            .order_by_asc(entity::permitted_channel::Column::ChannelId)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(PermittedChannel::from_entity)
            .collect()
    }
}
