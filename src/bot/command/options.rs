//! Helpers for reading slash command options.

use serenity::all::{ChannelType, GuildId, PartialChannel, ResolvedOption, ResolvedValue, User};

use crate::error::AppError;

fn find<'o, 'a>(options: &'o [ResolvedOption<'a>], name: &str) -> Option<&'o ResolvedValue<'a>> {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!("Falta el parámetro `{}`.", name))
}

/// Gets a required string option.
pub fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Result<&'a str, AppError> {
    match find(options, name) {
        Some(ResolvedValue::String(value)) => Ok(*value),
        _ => Err(missing(name)),
    }
}

/// Gets a required user option.
pub fn user_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Result<&'a User, AppError> {
    match find(options, name) {
        Some(ResolvedValue::User(user, _)) => Ok(*user),
        _ => Err(missing(name)),
    }
}

/// Channel kinds whose messages can be counted: text and announcement channels.
pub fn countable_channel_types() -> Vec<ChannelType> {
    vec![ChannelType::Text, ChannelType::News]
}

pub fn is_countable_channel(kind: ChannelType) -> bool {
    countable_channel_types().contains(&kind)
}

/// Gets a required channel option, accepting text and announcement channels only.
pub fn countable_channel_option<'a>(
    options: &[ResolvedOption<'a>],
    name: &str,
) -> Result<&'a PartialChannel, AppError> {
    match find(options, name) {
        Some(ResolvedValue::Channel(channel)) if is_countable_channel(channel.kind) => {
            Ok(*channel)
        }
        Some(ResolvedValue::Channel(_)) => Err(AppError::BadRequest(
            "Solo se pueden autorizar canales de texto o de anuncios.".to_string(),
        )),
        _ => Err(missing(name)),
    }
}

/// Gets the guild an interaction was sent from.
pub fn require_guild(guild_id: Option<GuildId>) -> Result<u64, AppError> {
    guild_id.map(GuildId::get).ok_or_else(|| {
        AppError::BadRequest("Este comando solo funciona dentro de un servidor.".to_string())
    })
}
