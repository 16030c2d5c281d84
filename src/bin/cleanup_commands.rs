//! Deletes every slash command registered for the bot application.
//!
//! Clears the global command set and, when `GUILD_ID` is set, the guild command set,
//! then lists both again to confirm. Independent of the running bot.

use serenity::all::{Command, GuildId, Http};

use registro_bot::{config::Config, error::AppError, startup};

fn log_commands(scope: &str, commands: &[Command]) {
    if commands.is_empty() {
        tracing::info!("{} commands: (none)", scope);
        return;
    }

    for command in commands {
        tracing::info!("{} command: {} (id={})", scope, command.name, command.id);
    }
}

async fn show_commands(http: &Http, guild_id: Option<GuildId>) -> Result<(), AppError> {
    let global = Command::get_global_commands(http).await?;
    log_commands("Global", &global);

    match guild_id {
        Some(guild_id) => {
            let guild = guild_id.get_commands(http).await?;
            log_commands("Guild", &guild);
        }
        None => tracing::warn!("GUILD_ID is not set; cannot list guild commands"),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let guild_id = config.guild_id.map(GuildId::new);

    let http = Http::new(&config.discord_token);
    let application = http.get_current_application_info().await?;
    http.set_application_id(application.id);
    tracing::info!("Cleaning commands of application {}", application.id);

    show_commands(&http, guild_id).await?;

    Command::set_global_commands(&http, Vec::new()).await?;
    tracing::info!("Deleted all global commands");

    match guild_id {
        Some(guild_id) => {
            guild_id.set_commands(&http, Vec::new()).await?;
            tracing::info!("Deleted all commands of guild {}", guild_id);
        }
        None => tracing::error!("GUILD_ID is not set; cannot delete guild commands"),
    }

    show_commands(&http, guild_id).await
}
