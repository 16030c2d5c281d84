//! Leaderboard commands: `tabla`, `reset_tabla`, `reset_user` and the ranking pager.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::{
    bot::{
        command::{
            options::{require_guild, user_option},
            respond, respond_text,
        },
        state::BotState,
        view::{
            leaderboard::{leaderboard_components, leaderboard_embed},
            pager::PagerId,
        },
    },
    error::AppError,
    service::leaderboard::LeaderboardService,
};

/// Shows the first page of the guild ranking.
pub async fn tabla(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(interaction.guild_id)?;
    let db = state.require_db()?;

    let page = LeaderboardService::new(db).get_page(guild_id, 0).await?;

    respond(
        ctx,
        interaction,
        CreateInteractionResponseMessage::new()
            .embed(leaderboard_embed(&page))
            .components(leaderboard_components(&page)),
    )
    .await
}

/// Re-renders the ranking message on a ◀ / ▶ click.
///
/// The page is recomputed from live data, so points earned since the last render
/// are shown and a page that no longer exists falls back to the last one.
pub async fn turn_page(
    ctx: &Context,
    state: &BotState,
    component: &ComponentInteraction,
    pager: PagerId,
) -> Result<(), AppError> {
    let guild_id = require_guild(component.guild_id)?;
    let db = state.require_db()?;

    let service = LeaderboardService::new(db);
    let total = service.count(guild_id).await?;
    let page = service.get_page(guild_id, pager.turn(total).page).await?;

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .embed(leaderboard_embed(&page))
                    .components(leaderboard_components(&page)),
            ),
        )
        .await?;

    Ok(())
}

pub async fn reset_tabla(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(interaction.guild_id)?;
    let db = state.require_db()?;

    LeaderboardService::new(db).reset_guild(guild_id).await?;

    respond_text(ctx, interaction, "✅ Tabla reseteada.", false).await
}

pub async fn reset_user(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(interaction.guild_id)?;
    let options = interaction.data.options();
    let user = user_option(&options, "usuario")?;

    let db = state.require_db()?;
    let removed = LeaderboardService::new(db)
        .reset_user(guild_id, user.id.get())
        .await?;

    let content = if removed {
        format!("✅ Puntos reseteados para <@{}>.", user.id)
    } else {
        format!("ℹ️ <@{}> no tiene puntos en la tabla.", user.id)
    };

    respond_text(ctx, interaction, content, false).await
}
