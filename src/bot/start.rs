use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{handler::Handler, state::BotState},
    config::Config,
    error::AppError,
};

/// Gateway intents the bot subscribes to.
///
/// `MESSAGE_CONTENT` is privileged and must be enabled in the Discord Developer Portal.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state passed to the handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(config: &Config, state: Arc<BotState>) -> Result<Client, AppError> {
    let client = Client::builder(&config.discord_token, intents())
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects to the gateway and processes events until the connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
