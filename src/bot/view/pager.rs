//! Stateless pagination buttons.
//!
//! Custom ids have the form `<view>:<prev|next>:<page>`, where `page` is the page
//! currently displayed. A click resolves to the neighbouring page of the live data,
//! so a stale page number never points past the last page. Views stop responding
//! `VIEW_TIMEOUT_SECS` after the message was last edited; the buttons are removed on
//! the first late click.

use serenity::all::{ButtonStyle, CreateActionRow, CreateButton};

use crate::model::pagination::Pagination;

/// Seconds a paginated view stays interactive after its last update.
pub const VIEW_TIMEOUT_SECS: i64 = 120;

/// Which paginated view a button belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerView {
    /// Guild activity ranking shown by `tabla`.
    Leaderboard,
    /// Registration list shown by `userbase`.
    Userbase,
}

impl PagerView {
    fn prefix(self) -> &'static str {
        match self {
            Self::Leaderboard => "tabla",
            Self::Userbase => "userbase",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "tabla" => Some(Self::Leaderboard),
            "userbase" => Some(Self::Userbase),
            _ => None,
        }
    }

    fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Leaderboard => ("◀", "▶"),
            Self::Userbase => ("❮", "❯"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Prev,
    Next,
}

/// Decoded pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerId {
    pub view: PagerView,
    pub step: PageStep,
    /// Page displayed when the button was rendered.
    pub page: u64,
}

impl PagerId {
    pub fn new(view: PagerView, step: PageStep, page: u64) -> Self {
        Self { view, step, page }
    }

    pub fn encode(&self) -> String {
        let step = match self.step {
            PageStep::Prev => "prev",
            PageStep::Next => "next",
        };
        format!("{}:{}:{}", self.view.prefix(), step, self.page)
    }

    /// Parses a custom id, returning `None` for anything that is not a pager button.
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.split(':');

        let view = PagerView::from_prefix(parts.next()?)?;
        let step = match parts.next()? {
            "prev" => PageStep::Prev,
            "next" => PageStep::Next,
            _ => return None,
        };
        let page = parts.next()?.parse::<u64>().ok()?;

        if parts.next().is_some() {
            return None;
        }

        Some(Self { view, step, page })
    }

    /// Page the click lands on, given the number of rows the view holds now.
    ///
    /// The displayed page is first pulled back inside the live data, then moved one
    /// step without leaving the first or last page.
    pub fn turn(&self, total: u64) -> Pagination {
        let current = Pagination::new(self.page).clamp(total);

        match self.step {
            PageStep::Prev => current.prev(),
            PageStep::Next => current.next(total),
        }
    }
}

/// Whether a view last updated at `last_update` (unix seconds) no longer responds.
pub fn is_expired(last_update: i64, now: i64) -> bool {
    now.saturating_sub(last_update) > VIEW_TIMEOUT_SECS
}

/// Previous/next buttons for `page` of a view.
pub fn pager_buttons(view: PagerView, page: u64) -> CreateActionRow {
    let (prev_label, next_label) = view.labels();

    CreateActionRow::Buttons(vec![
        CreateButton::new(PagerId::new(view, PageStep::Prev, page).encode())
            .label(prev_label)
            .style(ButtonStyle::Secondary),
        CreateButton::new(PagerId::new(view, PageStep::Next, page).encode())
            .label(next_label)
            .style(ButtonStyle::Secondary),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_view_step_and_page() {
        assert_eq!(
            PagerId::new(PagerView::Leaderboard, PageStep::Next, 3).encode(),
            "tabla:next:3"
        );
        assert_eq!(
            PagerId::new(PagerView::Userbase, PageStep::Prev, 0).encode(),
            "userbase:prev:0"
        );
    }

    #[test]
    fn parses_encoded_ids() {
        let id = PagerId::new(PagerView::Userbase, PageStep::Next, 12);

        assert_eq!(PagerId::parse(&id.encode()), Some(id));
    }

    #[test]
    fn rejects_foreign_ids() {
        for custom_id in [
            "",
            "tabla",
            "tabla:next",
            "tabla:up:1",
            "tabla:next:-1",
            "tabla:next:x",
            "tabla:next:1:extra",
            "leaderboard_wealth",
            "other:next:1",
        ] {
            assert_eq!(PagerId::parse(custom_id), None, "{custom_id}");
        }
    }

    #[test]
    fn turns_within_existing_pages() {
        let prev = |page| PagerId::new(PagerView::Leaderboard, PageStep::Prev, page);
        let next = |page| PagerId::new(PagerView::Leaderboard, PageStep::Next, page);

        assert_eq!(prev(0).turn(25).page, 0);
        assert_eq!(prev(2).turn(25).page, 1);
        assert_eq!(next(1).turn(25).page, 2);
        assert_eq!(next(2).turn(25).page, 2);
        assert_eq!(next(0).turn(0).page, 0);
    }

    /// The data shrank since the buttons were rendered.
    #[test]
    fn turns_from_stale_page() {
        let prev = PagerId::new(PagerView::Userbase, PageStep::Prev, 7);
        let next = PagerId::new(PagerView::Userbase, PageStep::Next, 7);

        assert_eq!(prev.turn(25).page, 1);
        assert_eq!(next.turn(25).page, 2);
        assert_eq!(next.turn(0).page, 0);
    }

    #[test]
    fn expires_after_timeout() {
        assert!(!is_expired(1_000, 1_000));
        assert!(!is_expired(1_000, 1_000 + VIEW_TIMEOUT_SECS));
        assert!(is_expired(1_000, 1_000 + VIEW_TIMEOUT_SECS + 1));
    }
}
