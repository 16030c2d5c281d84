use crate::{data::permitted_channel::PermittedChannelRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild;
mod is_permitted;
mod permit;
mod unpermit;

const GUILD_ID: u64 = 900_000_000_000_000_001;
const OTHER_GUILD_ID: u64 = 900_000_000_000_000_002;
