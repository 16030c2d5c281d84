//! Permitted channel factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a channel to a guild's allow-list.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `channel_id` - Discord channel ID
///
/// # Returns
/// - `Ok(entity::permitted_channel::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_permitted_channel(
    db: &DatabaseConnection,
    guild_id: u64,
    channel_id: u64,
) -> Result<entity::permitted_channel::Model, DbErr> {
    entity::permitted_channel::ActiveModel {
        guild_id: ActiveValue::Set(guild_id as i64),
        channel_id: ActiveValue::Set(channel_id as i64),
    }
    .insert(db)
    .await
}
