//! Channels in which message activity counts towards the leaderboard.

use crate::{error::AppError, util::parse::id_from_db};

/// Guild channel on the counting allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermittedChannel {
    /// Discord guild ID owning the channel.
    pub guild_id: u64,
    /// Discord channel ID.
    pub channel_id: u64,
}

impl PermittedChannel {
    pub fn from_entity(entity: entity::permitted_channel::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: id_from_db(entity.guild_id)?,
            channel_id: id_from_db(entity.channel_id)?,
        })
    }
}
