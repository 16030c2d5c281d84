//! `userbase`: paginated list of every registration, staff only.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::{
    bot::{
        command::{respond, respond_text},
        state::BotState,
        view::{
            pager::PagerId,
            userbase::{userbase_components, userbase_embed},
        },
    },
    error::AppError,
    model::pagination::Pagination,
    service::registration::RegistrationService,
};

pub const NO_REGISTRATIONS: &str = "No hay registros.";

pub async fn userbase(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let db = state.require_db()?;
    let registrations = RegistrationService::new(db).get_all().await?;

    if registrations.is_empty() {
        return respond_text(ctx, interaction, NO_REGISTRATIONS, true).await;
    }

    let pagination = Pagination::new(0);

    respond(
        ctx,
        interaction,
        CreateInteractionResponseMessage::new()
            .embed(userbase_embed(&registrations, pagination))
            .components(userbase_components(pagination)),
    )
    .await
}

/// Re-renders the list on a ❮ / ❯ click.
///
/// The message is public, so the click itself is staff-checked as well.
pub async fn turn_page(
    ctx: &Context,
    state: &BotState,
    component: &ComponentInteraction,
    pager: PagerId,
) -> Result<(), AppError> {
    if !state
        .staff
        .check_member(&ctx.cache, &ctx.http, component.member.as_ref())
        .await
    {
        return Err(AppError::Forbidden);
    }

    let db = state.require_db()?;
    let registrations = RegistrationService::new(db).get_all().await?;
    let pagination = pager.turn(registrations.len() as u64);

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .embed(userbase_embed(&registrations, pagination))
                    .components(userbase_components(pagination)),
            ),
        )
        .await?;

    Ok(())
}
