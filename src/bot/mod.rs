//! Discord bot: gateway events, slash commands and their views.
//!
//! The bot counts messages in permitted channels for the activity leaderboard and
//! serves the registration and admin slash commands. Commands are registered in the
//! configured guild when the bot connects.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel metadata
//! - `GUILD_MESSAGES` - Message events used for activity counting
//! - `MESSAGE_CONTENT` - Privileged; must be enabled in the Discord Developer Portal

pub mod command;
pub mod handler;
pub mod start;
pub mod state;
pub mod view;
