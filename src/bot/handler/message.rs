use serenity::all::{Context, Message};

use crate::{bot::state::BotState, error::AppError, service::channel::ChannelService};

/// Counts a message towards the leaderboard when it was sent in a permitted channel.
///
/// Bot messages, DMs and messages received while the bot runs without a database
/// are ignored.
pub async fn handle_message(state: &BotState, _ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(guild_id) = message.guild_id else {
        return;
    };

    let guild_id = guild_id.get();
    let user_id = message.author.id.get();

    match count_message(state, guild_id, message.channel_id.get(), user_id).await {
        Ok(true) => {
            tracing::debug!("Awarded a point to user {} in guild {}", user_id, guild_id);
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!(
                "Failed to count message from user {} in channel {} of guild {}: {}",
                user_id,
                message.channel_id,
                guild_id,
                e
            );
        }
    }
}

/// Applies the allow-list and hands the message to the activity tracker.
///
/// # Arguments
/// - `state` - Shared bot state holding the database and tracker
/// - `guild_id` - Guild the message was sent in
/// - `channel_id` - Channel the message was sent in
/// - `user_id` - Author of the message
///
/// # Returns
/// - `Ok(true)` - The message completed a bucket and one point was stored
/// - `Ok(false)` - Not counted (channel not permitted or no database) or no point due yet
/// - `Err(AppError)` - Checking the allow-list or storing the point failed
pub async fn count_message(
    state: &BotState,
    guild_id: u64,
    channel_id: u64,
    user_id: u64,
) -> Result<bool, AppError> {
    let (Some(db), Some(activity)) = (state.db.as_ref(), state.activity.as_ref()) else {
        return Ok(false);
    };

    if !ChannelService::new(db)
        .is_permitted(guild_id, channel_id)
        .await?
    {
        return Ok(false);
    }

    activity.record(guild_id, user_id).await
}
