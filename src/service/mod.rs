//! Service layer for business logic.
//!
//! Services sit between the command handlers and the repositories. They apply the
//! bot's rules (one registration per user, trimmed input, clamped pages, the message
//! counting threshold, the staff check) and work with domain models only.

pub mod activity;
pub mod channel;
pub mod leaderboard;
pub mod notify;
pub mod registration;
pub mod staff;
