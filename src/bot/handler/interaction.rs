//! Interaction routing: slash commands go to the command table, button clicks to the
//! pager.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, Interaction,
};

use crate::{
    bot::{
        command,
        state::BotState,
        view::pager::{is_expired, PagerId, PagerView},
    },
    error::AppError,
};

pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, &command).await,
        Interaction::Component(component) => handle_component(state, &ctx, &component).await,
        _ => {}
    }
}

async fn handle_command(state: &BotState, ctx: &Context, interaction: &CommandInteraction) {
    tracing::debug!(
        "Command /{} from {} ({})",
        interaction.data.name,
        interaction.user.tag(),
        interaction.user.id
    );

    if let Err(e) = command::dispatch(ctx, state, interaction).await {
        if let Err(send_err) = interaction
            .create_response(&ctx.http, error_response(&e))
            .await
        {
            tracing::error!(
                "Failed to report error for /{}: {} (original error: {})",
                interaction.data.name,
                send_err,
                e
            );
        }
    }
}

async fn handle_component(state: &BotState, ctx: &Context, component: &ComponentInteraction) {
    let Some(pager) = PagerId::parse(&component.data.custom_id) else {
        tracing::debug!("Ignoring unknown component {}", component.data.custom_id);
        return;
    };

    let result = if view_expired(component) {
        close_view(ctx, component).await
    } else {
        match pager.view {
            PagerView::Leaderboard => {
                command::leaderboard::turn_page(ctx, state, component, pager).await
            }
            PagerView::Userbase => command::userbase::turn_page(ctx, state, component, pager).await,
        }
    };

    if let Err(e) = result {
        if let Err(send_err) = component
            .create_response(&ctx.http, error_response(&e))
            .await
        {
            tracing::error!(
                "Failed to report error for component {}: {} (original error: {})",
                component.data.custom_id,
                send_err,
                e
            );
        }
    }
}

/// Whether the message holding the buttons was last updated too long ago.
fn view_expired(component: &ComponentInteraction) -> bool {
    let last_update = component
        .message
        .edited_timestamp
        .unwrap_or(component.message.timestamp);

    is_expired(last_update.unix_timestamp(), Utc::now().timestamp())
}

/// Removes the buttons of an expired view, leaving its embed in place.
async fn close_view(ctx: &Context, component: &ComponentInteraction) -> Result<(), AppError> {
    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new().components(Vec::new()),
            ),
        )
        .await?;

    Ok(())
}

/// Ephemeral reply carrying the user-facing message of an error.
fn error_response(error: &AppError) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(error.user_message())
            .ephemeral(true),
    )
}
