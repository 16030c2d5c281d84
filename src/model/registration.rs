//! Registration domain models and parameters.
//!
//! A registration links a Discord user to the nickname and external ("space") id they
//! play under. Several users may share the same external id.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::id_from_db};

/// Nickname and external id registered by a Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    /// Discord ID of the registered user.
    pub user_id: u64,
    /// Discord tag of the user at the time of the last write.
    pub discord_tag: String,
    /// In-game nickname.
    pub nickname: String,
    /// External id linked to the user; not unique.
    pub external_id: String,
    /// Timestamp when the registration was first created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last overwrite.
    pub updated_at: DateTime<Utc>,
}

impl Registration {
    /// Converts an entity model to a registration domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Registration)` - The converted registration
    /// - `Err(AppError::InternalErr(InvalidStoredId))` - Stored user id is negative
    pub fn from_entity(entity: entity::registration::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: id_from_db(entity.user_id)?,
            discord_tag: entity.discord_tag,
            nickname: entity.nickname,
            external_id: entity.external_id,
            created_at: entity.created_at.and_utc(),
            updated_at: entity.updated_at.and_utc(),
        })
    }
}

/// Parameters for creating or overwriting a registration.
///
/// Used both for self-registration and for staff edits; on conflict the tag, nickname
/// and external id are replaced and `created_at` is preserved.
#[derive(Debug, Clone)]
pub struct UpsertRegistrationParam {
    /// Discord ID of the user being registered.
    pub user_id: u64,
    /// Discord tag of the user being registered.
    pub discord_tag: String,
    /// In-game nickname.
    pub nickname: String,
    /// External id.
    pub external_id: String,
}

impl UpsertRegistrationParam {
    /// Returns a copy with surrounding whitespace stripped from the nickname and id.
    pub fn trimmed(self) -> Self {
        Self {
            nickname: self.nickname.trim().to_string(),
            external_id: self.external_id.trim().to_string(),
            ..self
        }
    }
}
