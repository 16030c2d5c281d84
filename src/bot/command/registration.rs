//! Registration commands: `registrar`, `consultar`, `userid`, `editar` and
//! `eliminar_registro`.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseMessage,
};

use crate::{
    bot::{
        command::{
            options::{string_option, user_option},
            respond, respond_text,
        },
        state::BotState,
        view::registration::{
            already_registered_embed, lookup_embed, no_matches_notice, registered_embed,
            registration_embed, NOT_REGISTERED,
        },
    },
    error::AppError,
    model::registration::UpsertRegistrationParam,
    service::{notify::new_registration_notice, registration::RegistrationService},
};

fn nickname_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "nickname", "Nickname en el juego")
        .required(true)
}

fn external_id_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "external_id", "ID Espacial")
        .required(true)
}

fn usuario_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "usuario", "Usuario de Discord").required(true)
}

pub fn registrar_options(command: CreateCommand) -> CreateCommand {
    command
        .add_option(nickname_option())
        .add_option(external_id_option())
}

/// Single `usuario` option, shared by the commands that target one member.
pub fn member_options(command: CreateCommand) -> CreateCommand {
    command.add_option(usuario_option())
}

pub fn userid_options(command: CreateCommand) -> CreateCommand {
    command.add_option(
        CreateCommandOption::new(
            CommandOptionType::String,
            "id_espacial",
            "ID Espacial a buscar",
        )
        .required(true),
    )
}

pub fn editar_options(command: CreateCommand) -> CreateCommand {
    command
        .add_option(usuario_option())
        .add_option(nickname_option())
        .add_option(external_id_option())
}

/// Registers the caller once and notifies the owner.
pub async fn registrar(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let options = interaction.data.options();
    let nickname = string_option(&options, "nickname")?;
    let external_id = string_option(&options, "external_id")?;

    let db = state.require_db()?;
    let result = RegistrationService::new(db)
        .register(UpsertRegistrationParam {
            user_id: interaction.user.id.get(),
            discord_tag: interaction.user.tag(),
            nickname: nickname.to_string(),
            external_id: external_id.to_string(),
        })
        .await;

    let registration = match result {
        Ok(registration) => registration,
        Err(AppError::AlreadyRegistered) => {
            return respond(
                ctx,
                interaction,
                CreateInteractionResponseMessage::new()
                    .embed(already_registered_embed())
                    .ephemeral(true),
            )
            .await;
        }
        Err(e) => return Err(e),
    };

    tracing::info!(
        "Registered {} ({}) as {} / {}",
        registration.discord_tag,
        registration.user_id,
        registration.nickname,
        registration.external_id
    );

    state
        .notifier
        .notify(
            &ctx.http,
            &new_registration_notice(
                &registration.discord_tag,
                &registration.nickname,
                &registration.external_id,
            ),
        )
        .await;

    respond(
        ctx,
        interaction,
        CreateInteractionResponseMessage::new()
            .embed(registered_embed(&registration))
            .ephemeral(true),
    )
    .await
}

pub async fn consultar(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let options = interaction.data.options();
    let user = user_option(&options, "usuario")?;

    let db = state.require_db()?;
    let Some(registration) = RegistrationService::new(db).get(user.id.get()).await? else {
        return respond_text(ctx, interaction, NOT_REGISTERED, true).await;
    };

    respond(
        ctx,
        interaction,
        CreateInteractionResponseMessage::new()
            .embed(registration_embed(&registration, user.face())),
    )
    .await
}

/// Reverse lookup: lists the users registered with an external id.
pub async fn userid(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let options = interaction.data.options();
    let external_id = string_option(&options, "id_espacial")?;

    let db = state.require_db()?;
    let matches = RegistrationService::new(db)
        .find_by_external_id(external_id)
        .await?;

    if matches.is_empty() {
        return respond_text(ctx, interaction, no_matches_notice(external_id.trim()), false).await;
    }

    respond(
        ctx,
        interaction,
        CreateInteractionResponseMessage::new().embed(lookup_embed(&matches)),
    )
    .await
}

pub async fn editar(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let options = interaction.data.options();
    let user = user_option(&options, "usuario")?;
    let nickname = string_option(&options, "nickname")?;
    let external_id = string_option(&options, "external_id")?;

    let db = state.require_db()?;
    let registration = RegistrationService::new(db)
        .edit(UpsertRegistrationParam {
            user_id: user.id.get(),
            discord_tag: user.tag(),
            nickname: nickname.to_string(),
            external_id: external_id.to_string(),
        })
        .await?;

    tracing::info!(
        "{} edited registration of {} ({})",
        interaction.user.tag(),
        registration.discord_tag,
        registration.user_id
    );

    respond_text(ctx, interaction, "✏️ Registro Actualizado.", false).await
}

pub async fn eliminar_registro(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let options = interaction.data.options();
    let user = user_option(&options, "usuario")?;

    let db = state.require_db()?;
    if !RegistrationService::new(db).delete(user.id.get()).await? {
        return respond_text(ctx, interaction, NOT_REGISTERED, true).await;
    }

    tracing::info!(
        "{} deleted registration of {} ({})",
        interaction.user.tag(),
        user.tag(),
        user.id
    );

    respond_text(
        ctx,
        interaction,
        format!("🗑️ Registro eliminado para **{}**.", user.tag()),
        false,
    )
    .await
}
