//! Slash command table and dispatch.
//!
//! Every command the bot offers is listed once in `COMMANDS`, together with who may
//! run it. Registration in Discord and dispatch both read from that table, and staff
//! access is checked here before any handler runs.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::{bot::state::BotState, error::AppError};

pub mod channel;
pub mod leaderboard;
pub mod options;
pub mod registration;
pub mod userbase;

/// Who may run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Requires elevated permissions or a configured staff role.
    Staff,
}

/// Entry of the command table.
pub struct SlashCommand {
    pub name: &'static str,
    pub description: &'static str,
    pub access: Access,
    /// Adds the command's options to the builder.
    pub register: fn(CreateCommand) -> CreateCommand,
}

impl SlashCommand {
    /// Builds the command for registration with Discord.
    pub fn create(&self) -> CreateCommand {
        (self.register)(CreateCommand::new(self.name).description(self.description))
    }
}

fn no_options(command: CreateCommand) -> CreateCommand {
    command
}

pub const COMMANDS: &[SlashCommand] = &[
    SlashCommand {
        name: "registrar",
        description: "Registra Nickname e ID Espacial",
        access: Access::Public,
        register: registration::registrar_options,
    },
    SlashCommand {
        name: "consultar",
        description: "(Staff) Consultar Registro",
        access: Access::Staff,
        register: registration::member_options,
    },
    SlashCommand {
        name: "userid",
        description: "(Staff) Busca por ID Espacial",
        access: Access::Staff,
        register: registration::userid_options,
    },
    SlashCommand {
        name: "editar",
        description: "(Staff) Editar Registro",
        access: Access::Staff,
        register: registration::editar_options,
    },
    SlashCommand {
        name: "eliminar_registro",
        description: "(Staff) Elimina registro",
        access: Access::Staff,
        register: registration::member_options,
    },
    SlashCommand {
        name: "permitchannel",
        description: "(Admin) Autoriza canal",
        access: Access::Staff,
        register: channel::channel_options,
    },
    SlashCommand {
        name: "borrarchannel",
        description: "(Admin) Desautoriza canal",
        access: Access::Staff,
        register: channel::channel_options,
    },
    SlashCommand {
        name: "reset_tabla",
        description: "(Staff) Resetea Ranking",
        access: Access::Staff,
        register: no_options,
    },
    SlashCommand {
        name: "reset_user",
        description: "(Staff) Resetea los puntos de un usuario",
        access: Access::Staff,
        register: registration::member_options,
    },
    SlashCommand {
        name: "tabla",
        description: "Muestra el Ranking",
        access: Access::Public,
        register: no_options,
    },
    SlashCommand {
        name: "userbase",
        description: "(Staff) Ver registrados",
        access: Access::Staff,
        register: no_options,
    },
];

pub fn find_command(name: &str) -> Option<&'static SlashCommand> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Builders for every command in the table, in table order.
pub fn create_commands() -> Vec<CreateCommand> {
    COMMANDS.iter().map(SlashCommand::create).collect()
}

pub fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|command| command.name).collect()
}

/// Runs a slash command after checking the caller may use it.
///
/// # Returns
/// - `Ok(())` - The command replied to the interaction
/// - `Err(AppError::Forbidden)` - A staff command was invoked by a non-staff caller
/// - `Err(AppError)` - The command failed before replying
pub async fn dispatch(
    ctx: &Context,
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(command) = find_command(&interaction.data.name) else {
        tracing::warn!("Received unknown command /{}", interaction.data.name);
        return Ok(());
    };

    if command.access == Access::Staff
        && !state
            .staff
            .check_member(&ctx.cache, &ctx.http, interaction.member.as_deref())
            .await
    {
        tracing::info!(
            "Refused /{} for {} ({}): not staff",
            command.name,
            interaction.user.tag(),
            interaction.user.id
        );
        return Err(AppError::Forbidden);
    }

    match command.name {
        "registrar" => registration::registrar(ctx, state, interaction).await,
        "consultar" => registration::consultar(ctx, state, interaction).await,
        "userid" => registration::userid(ctx, state, interaction).await,
        "editar" => registration::editar(ctx, state, interaction).await,
        "eliminar_registro" => registration::eliminar_registro(ctx, state, interaction).await,
        "permitchannel" => channel::permitchannel(ctx, state, interaction).await,
        "borrarchannel" => channel::borrarchannel(ctx, state, interaction).await,
        "reset_tabla" => leaderboard::reset_tabla(ctx, state, interaction).await,
        "reset_user" => leaderboard::reset_user(ctx, state, interaction).await,
        "tabla" => leaderboard::tabla(ctx, state, interaction).await,
        "userbase" => userbase::userbase(ctx, state, interaction).await,
        other => {
            tracing::error!("Command /{} is in the table but has no handler", other);
            Ok(())
        }
    }
}

/// Sends the initial response to a slash command.
pub async fn respond(
    ctx: &Context,
    interaction: &CommandInteraction,
    message: CreateInteractionResponseMessage,
) -> Result<(), AppError> {
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Sends a plain text response, visible only to the caller when `ephemeral` is set.
pub async fn respond_text(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<(), AppError> {
    respond(
        ctx,
        interaction,
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral),
    )
    .await
}
