//! Ready event handler for bot initialization.
//!
//! Fired once the bot has authenticated with the gateway. Besides logging the
//! connection, this is where the slash command table is registered in the configured
//! guild. Registering per guild makes new commands available immediately, unlike
//! global commands.

use serenity::all::{Context, Ready};

use crate::{
    bot::{command, state::BotState},
    service::channel::ChannelService,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state holding the command guild and database
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.tag());

    let Some(guild_id) = state.guild_id else {
        tracing::error!("GUILD_ID is not set; slash commands were not synced");
        return;
    };

    match guild_id
        .set_commands(&ctx.http, command::create_commands())
        .await
    {
        Ok(synced) => {
            tracing::info!("Synced {} commands in guild {}", synced.len(), guild_id);

            if synced.is_empty() {
                tracing::warn!(
                    "No commands were synced; local command table: {:?}",
                    command::command_names()
                );
            }
        }
        Err(e) => {
            tracing::error!("Failed to sync commands in guild {}: {}", guild_id, e);
        }
    }

    let Some(db) = state.db.as_ref() else {
        tracing::warn!("Running without a database; messages will not be counted");
        return;
    };

    match ChannelService::new(db)
        .permitted_channels(guild_id.get())
        .await
    {
        Ok(channels) if channels.is_empty() => {
            tracing::warn!(
                "No channels are permitted in guild {}; use /permitchannel to start counting",
                guild_id
            );
        }
        Ok(channels) => {
            tracing::info!(
                "Counting messages in {} channels of guild {}",
                channels.len(),
                guild_id
            );
        }
        Err(e) => {
            tracing::error!("Failed to load permitted channels of guild {}: {}", guild_id, e);
        }
    }
}
