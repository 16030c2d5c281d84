//! Registration service for business logic.
//!
//! This module provides the `RegistrationService` used by the `registrar`, `consultar`,
//! `userid`, `editar`, `eliminar_registro` and `userbase` commands.

use sea_orm::DatabaseConnection;

use crate::{
    data::registration::RegistrationRepository,
    error::AppError,
    model::registration::{Registration, UpsertRegistrationParam},
};

/// Maximum number of matches shown by a reverse lookup.
pub const MAX_LOOKUP_RESULTS: usize = 10;

/// Service providing business logic for registrations.
pub struct RegistrationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegistrationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers the calling user.
    ///
    /// A user can only register once; later changes go through `edit`, which staff use.
    ///
    /// # Arguments
    /// - `param` - Caller id, tag, nickname and external id
    ///
    /// # Returns
    /// - `Ok(Registration)` - The new registration
    /// - `Err(AppError::AlreadyRegistered)` - The caller already has a registration
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: UpsertRegistrationParam) -> Result<Registration, AppError> {
        RegistrationRepository::new(self.db)
            .create(param.trimmed())
            .await?
            .ok_or(AppError::AlreadyRegistered)
    }

    /// Gets the registration of a user.
    ///
    /// # Returns
    /// - `Ok(Some(Registration))` - The user is registered
    /// - `Ok(None)` - The user is not registered
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, user_id: u64) -> Result<Option<Registration>, AppError> {
        RegistrationRepository::new(self.db)
            .find_by_user_id(user_id)
            .await
    }

    /// Finds the users linked to an external id.
    ///
    /// The input is trimmed before matching. At most `MAX_LOOKUP_RESULTS` registrations
    /// are returned, most recently updated first.
    ///
    /// # Arguments
    /// - `external_id` - External id as typed by the caller
    ///
    /// # Returns
    /// - `Ok(Vec<Registration>)` - Matching registrations (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Vec<Registration>, AppError> {
        let mut matches = RegistrationRepository::new(self.db)
            .find_by_external_id(external_id.trim())
            .await?;

        matches.truncate(MAX_LOOKUP_RESULTS);

        Ok(matches)
    }

    /// Overwrites a user's registration on behalf of staff.
    ///
    /// Creates the registration when the user has none.
    ///
    /// # Returns
    /// - `Ok(Registration)` - The stored registration
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn edit(&self, param: UpsertRegistrationParam) -> Result<Registration, AppError> {
        RegistrationRepository::new(self.db)
            .upsert(param.trimmed())
            .await
    }

    /// Deletes a user's registration.
    ///
    /// # Returns
    /// - `Ok(true)` - The registration was deleted
    /// - `Ok(false)` - The user was not registered
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: u64) -> Result<bool, AppError> {
        RegistrationRepository::new(self.db).delete(user_id).await
    }

    /// Gets every registration, most recently updated first.
    pub async fn get_all(&self) -> Result<Vec<Registration>, AppError> {
        RegistrationRepository::new(self.db).get_all().await
    }
}
