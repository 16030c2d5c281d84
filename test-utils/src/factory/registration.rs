//! Registration factory for creating test registration rows.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::registration::RegistrationFactory;
///
/// let registration = RegistrationFactory::new(&db)
///     .user_id(123456789)
///     .external_id("shared-id")
///     .build()
///     .await?;
/// ```
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    discord_tag: String,
    nickname: String,
    external_id: String,
    updated_at: NaiveDateTime,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented
    /// - discord_tag: `"user{id}"`
    /// - nickname: `"Nick {id}"`
    /// - external_id: `"EXT-{id}"`
    /// - updated_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id as i64,
            discord_tag: format!("user{}", id),
            nickname: format!("Nick {}", id),
            external_id: format!("EXT-{}", id),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id as i64;
        self
    }

    pub fn discord_tag(mut self, discord_tag: impl Into<String>) -> Self {
        self.discord_tag = discord_tag.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Sets both timestamps, used to control the `updated_at DESC` ordering.
    pub fn updated_at(mut self, updated_at: NaiveDateTime) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the registration into the database.
    ///
    /// # Returns
    /// - `Ok(entity::registration::Model)` - Created registration
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            discord_tag: ActiveValue::Set(self.discord_tag),
            nickname: ActiveValue::Set(self.nickname),
            external_id: ActiveValue::Set(self.external_id),
            created_at: ActiveValue::Set(self.updated_at),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registration with default values.
///
/// Shorthand for `RegistrationFactory::new(db).build().await`.
pub async fn create_registration(
    db: &DatabaseConnection,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db).build().await
}
