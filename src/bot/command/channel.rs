//! Channel allow-list commands: `permitchannel` and `borrarchannel`.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::{
        command::{
            options::{countable_channel_option, countable_channel_types, require_guild},
            respond_text,
        },
        state::BotState,
    },
    error::AppError,
    service::channel::ChannelService,
};

pub fn channel_options(command: CreateCommand) -> CreateCommand {
    command.add_option(
        CreateCommandOption::new(CommandOptionType::Channel, "canal", "Canal de texto")
            .channel_types(countable_channel_types())
            .required(true),
    )
}

pub async fn permitchannel(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(interaction.guild_id)?;
    let options = interaction.data.options();
    let channel = countable_channel_option(&options, "canal")?;

    let db = state.require_db()?;
    let added = ChannelService::new(db)
        .permit(guild_id, channel.id.get())
        .await?;

    if added {
        tracing::info!("Counting messages in channel {} of guild {}", channel.id, guild_id);
    }

    respond_text(
        ctx,
        interaction,
        format!("✅ Canal autorizado: <#{}>", channel.id),
        true,
    )
    .await
}

pub async fn borrarchannel(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(interaction.guild_id)?;
    let options = interaction.data.options();
    let channel = countable_channel_option(&options, "canal")?;

    let db = state.require_db()?;
    let removed = ChannelService::new(db)
        .unpermit(guild_id, channel.id.get())
        .await?;

    if removed {
        tracing::info!(
            "Stopped counting messages in channel {} of guild {}",
            channel.id,
            guild_id
        );
    }

    respond_text(
        ctx,
        interaction,
        format!("🗑️ Canal desautorizado: <#{}>", channel.id),
        true,
    )
    .await
}
