//! Registration list embed for `userbase`.

use serenity::all::{CreateActionRow, CreateEmbed, CreateEmbedFooter};

use crate::{
    bot::view::{
        colour,
        pager::{pager_buttons, PagerView},
    },
    model::{pagination::Pagination, registration::Registration},
    util::markdown::escape_markdown,
};

pub const END_OF_LIST: &str = "Fin de la lista.";

/// Lines for one page of the list, numbered across pages.
///
/// Tags, nicknames and ids are user input, so markdown in them is escaped.
pub fn userbase_lines(registrations: &[Registration], pagination: Pagination) -> Vec<String> {
    pagination
        .slice(registrations)
        .iter()
        .enumerate()
        .map(|(index, registration)| {
            format!(
                "**{}.** {} | Nick=`{}` | ID=`{}`",
                pagination.offset() + index as u64 + 1,
                escape_markdown(&registration.discord_tag),
                escape_markdown(&registration.nickname),
                escape_markdown(&registration.external_id),
            )
        })
        .collect()
}

/// Builds the embed for the clamped page of the registration list.
pub fn userbase_embed(registrations: &[Registration], pagination: Pagination) -> CreateEmbed {
    let lines = userbase_lines(registrations, pagination);
    let description = if lines.is_empty() {
        END_OF_LIST.to_string()
    } else {
        lines.join("\n")
    };

    CreateEmbed::new()
        .title("📋 Lista de Usuarios Registrados")
        .colour(colour::GREEN)
        .description(description)
        .footer(CreateEmbedFooter::new(format!(
            "Página {}/{} · {} registrados",
            pagination.page + 1,
            pagination.total_pages(registrations.len() as u64),
            registrations.len()
        )))
}

pub fn userbase_components(pagination: Pagination) -> Vec<CreateActionRow> {
    vec![pager_buttons(PagerView::Userbase, pagination.page)]
}
