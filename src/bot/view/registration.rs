//! Embeds for registration commands.

use serenity::all::CreateEmbed;

use crate::{
    bot::view::colour, error::ALREADY_REGISTERED_NOTICE, model::registration::Registration,
};

pub const NOT_REGISTERED: &str = "No registrado.";

/// Confirmation shown to a user after `registrar`.
pub fn registered_embed(registration: &Registration) -> CreateEmbed {
    CreateEmbed::new()
        .title("✅ Registro Completado")
        .description(format!(
            "Nick: `{}`\nID: `{}`",
            registration.nickname, registration.external_id
        ))
        .colour(colour::GREEN)
}

pub fn already_registered_embed() -> CreateEmbed {
    CreateEmbed::new()
        .description(ALREADY_REGISTERED_NOTICE)
        .colour(colour::RED)
}

/// Registration card for `consultar`, with the user's avatar as thumbnail.
pub fn registration_embed(registration: &Registration, avatar_url: String) -> CreateEmbed {
    CreateEmbed::new()
        .title("📄 Registro")
        .colour(colour::BLUE)
        .thumbnail(avatar_url)
        .field("Usuario", &registration.discord_tag, false)
        .field("Nick", &registration.nickname, true)
        .field("ID", &registration.external_id, true)
}

/// Reverse lookup results for `userid`, one field per registration.
pub fn lookup_embed(matches: &[Registration]) -> CreateEmbed {
    CreateEmbed::new()
        .title("🔎 Resultados")
        .colour(colour::BLURPLE)
        .fields(matches.iter().map(|registration| {
            (
                registration.discord_tag.clone(),
                lookup_field_value(registration),
                false,
            )
        }))
}

fn lookup_field_value(registration: &Registration) -> String {
    format!(
        "Nick: `{}`\nDiscord ID: `{}`",
        registration.nickname, registration.user_id
    )
}

/// Reply when no registration uses `external_id`.
pub fn no_matches_notice(external_id: &str) -> String {
    format!("ℹ️ No encontré registros con ID `{}`.", external_id)
}
