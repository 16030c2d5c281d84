//! Registration data repository for database operations.
//!
//! This module provides the `RegistrationRepository` for managing nickname and external id
//! registrations. It handles upserts, lookups by Discord id and by external id, listing
//! and deletion, with conversion between entity models and domain models at the
//! infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::registration::{Registration, UpsertRegistrationParam},
    util::parse::id_to_db,
};

/// Repository providing database operations for registrations.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, overwriting and deleting registration records.
pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    /// Creates a new RegistrationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegistrationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a registration unless the user already has one.
    ///
    /// The check and the insert are a single statement, so concurrent calls for the
    /// same user store exactly one registration.
    ///
    /// # Arguments
    /// - `param` - Registration values to store
    ///
    /// # Returns
    /// - `Ok(Some(Registration))` - The new registration
    /// - `Ok(None)` - The user was already registered; nothing was written
    /// - `Err(AppError::DbErr)` - Database error during insert or read-back
    pub async fn create(
        &self,
        param: UpsertRegistrationParam,
    ) -> Result<Option<Registration>, AppError> {
        let now = Utc::now().naive_utc();
        let user_id = param.user_id;

        let result = entity::prelude::Registration::insert(entity::registration::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(user_id)),
            discord_tag: ActiveValue::Set(param.discord_tag),
            nickname: ActiveValue::Set(param.nickname),
            external_id: ActiveValue::Set(param.external_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::registration::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec(self.db)
        .await;

        match result {
            Ok(_) => self.find_by_user_id(user_id).await,
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Inserts a registration or overwrites the existing one for the same user.
    ///
    /// On conflict by user id the Discord tag, nickname, external id and `updated_at`
    /// are replaced while `created_at` keeps its original value.
    ///
    /// # Arguments
    /// - `param` - Registration values to store
    ///
    /// # Returns
    /// - `Ok(Registration)` - The created or updated registration
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertRegistrationParam) -> Result<Registration, AppError> {
        let now = Utc::now().naive_utc();

        let entity = entity::prelude::Registration::insert(entity::registration::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(param.user_id)),
            discord_tag: ActiveValue::Set(param.discord_tag),
            nickname: ActiveValue::Set(param.nickname),
            external_id: ActiveValue::Set(param.external_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::registration::Column::UserId)
                .update_columns([
                    entity::registration::Column::DiscordTag,
                    entity::registration::Column::Nickname,
                    entity::registration::Column::ExternalId,
                    entity::registration::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Registration::from_entity(entity)
    }

    /// Finds the registration of a Discord user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(Registration))` - The user is registered
    /// - `Ok(None)` - No registration exists for that user
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<Registration>, AppError> {
        let entity = entity::prelude::Registration::find_by_id(id_to_db(user_id))
            .one(self.db)
            .await?;

        entity.map(Registration::from_entity).transpose()
    }

    /// Finds every registration linked to an external id.
    ///
    /// External ids are not unique, so several users may be returned. Results are ordered
    /// by most recently updated first.
    ///
    /// # Arguments
    /// - `external_id` - Exact external id to match
    ///
    /// # Returns
    /// - `Ok(Vec<Registration>)` - Matching registrations (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Vec<Registration>, AppError> {
        let entities = entity::prelude::Registration::find()
            .filter(entity::registration::Column::ExternalId.eq(external_id))
            .order_by_desc(entity::registration::Column::UpdatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Registration::from_entity).collect()
    }

    /// Gets every registration, most recently updated first.
    ///
    /// # Returns
    /// - `Ok(Vec<Registration>)` - All registrations (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Registration>, AppError> {
        let entities = entity::prelude::Registration::find()
            .order_by_desc(entity::registration::Column::UpdatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Registration::from_entity).collect()
    }

    /// Deletes the registration of a Discord user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(true)` - A registration was deleted
    /// - `Ok(false)` - The user had no registration
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::Registration::delete_by_id(id_to_db(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
