//! Embed and button builders for the bot's responses.
//!
//! Paginated views keep no state in the process: the page shown and the view kind
//! are encoded in the button custom ids (see `pager`), and every click re-reads the
//! data and re-renders the page.

pub mod leaderboard;
pub mod pager;
pub mod registration;
pub mod userbase;

/// Embed colours.
pub mod colour {
    pub const RED: u32 = 0xE74C3C;
    pub const GREEN: u32 = 0x2ECC71;
    pub const BLUE: u32 = 0x3498DB;
    pub const BLURPLE: u32 = 0x5865F2;
}
