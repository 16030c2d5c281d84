//! Channel allow-list service.

use sea_orm::DatabaseConnection;

use crate::{
    data::permitted_channel::PermittedChannelRepository, error::AppError,
    model::permitted_channel::PermittedChannel,
};

/// Service managing which channels count towards the leaderboard.
pub struct ChannelService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ChannelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts counting messages in a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was added to the allow-list
    /// - `Ok(false)` - The channel was already permitted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn permit(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        PermittedChannelRepository::new(self.db)
            .permit(guild_id, channel_id)
            .await
    }

    /// Stops counting messages in a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was removed from the allow-list
    /// - `Ok(false)` - The channel was not permitted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn unpermit(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        PermittedChannelRepository::new(self.db)
            .unpermit(guild_id, channel_id)
            .await
    }

    pub async fn is_permitted(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        PermittedChannelRepository::new(self.db)
            .is_permitted(guild_id, channel_id)
            .await
    }

    /// Lists the channels whose messages are counted in a guild.
    pub async fn permitted_channels(
        &self,
        guild_id: u64,
    ) -> Result<Vec<PermittedChannel>, AppError> {
        PermittedChannelRepository::new(self.db)
            .get_by_guild(guild_id)
            .await
    }
}
