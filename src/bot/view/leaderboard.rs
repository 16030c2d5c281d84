//! Ranking embed for `tabla`.

use serenity::all::{CreateActionRow, CreateEmbed, CreateEmbedFooter};

use crate::{
    bot::view::{
        colour,
        pager::{pager_buttons, PagerView},
    },
    model::message_count::LeaderboardPage,
};

pub const EMPTY_LEADERBOARD: &str = "Sin datos aún.";

/// One line per ranked user showing rank, mention and points.
pub fn leaderboard_lines(page: &LeaderboardPage) -> Vec<String> {
    page.entries
        .iter()
        .map(|entry| {
            format!(
                "**#{}** — <@{}> — **{}**",
                entry.rank, entry.user_id, entry.counted
            )
        })
        .collect()
}

/// Builds the ranking embed. Empty leaderboards get a placeholder and no footer.
pub fn leaderboard_embed(page: &LeaderboardPage) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🏆 RANKING 🏆")
        .colour(colour::BLURPLE);

    let lines = leaderboard_lines(page);
    if lines.is_empty() {
        return embed.description(EMPTY_LEADERBOARD);
    }

    embed
        .description(lines.join("\n"))
        .footer(CreateEmbedFooter::new(format!("Página {}", page.page + 1)))
}

pub fn leaderboard_components(page: &LeaderboardPage) -> Vec<CreateActionRow> {
    vec![pager_buttons(PagerView::Leaderboard, page.page)]
}
