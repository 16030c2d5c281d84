use crate::{data::message_count::MessageCountRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod add_points;
mod count_by_guild;
mod get_leaderboard;
mod reset_guild;
mod reset_user;

const GUILD_ID: u64 = 800_000_000_000_000_001;
const OTHER_GUILD_ID: u64 = 800_000_000_000_000_002;
