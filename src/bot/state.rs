//! Shared state handed to every event handler.

use sea_orm::DatabaseConnection;
use serenity::all::GuildId;

use crate::{
    config::Config,
    error::AppError,
    service::{activity::ActivityTracker, notify::OwnerNotifier, staff::StaffPolicy},
};

/// Resources the bot's handlers work with.
///
/// `db` is `None` when the database could not be reached at startup. In that case no
/// messages are counted and commands that need storage answer with a notice.
pub struct BotState {
    pub db: Option<DatabaseConnection>,
    pub activity: Option<ActivityTracker>,
    pub staff: StaffPolicy,
    pub notifier: OwnerNotifier,
    /// Guild the slash commands are registered in.
    pub guild_id: Option<GuildId>,
}

impl BotState {
    /// Builds the state and, when a database is available, starts the activity tracker.
    ///
    /// Must be called from within the tokio runtime.
    pub fn new(config: &Config, db: Option<DatabaseConnection>) -> Self {
        let activity = db.clone().map(ActivityTracker::spawn);

        Self {
            db,
            activity,
            staff: StaffPolicy::new(config.staff_roles.clone()),
            notifier: OwnerNotifier::new(config.owner_id),
            guild_id: config.guild_id.map(GuildId::new),
        }
    }

    /// Returns the database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The bot started with a database
    /// - `Err(AppError::DatabaseUnavailable)` - The bot is running without one
    pub fn require_db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db.as_ref().ok_or(AppError::DatabaseUnavailable)
    }
}
