//! Leaderboard service for the `tabla`, `reset_tabla` and `reset_user` commands.

use sea_orm::DatabaseConnection;

use crate::{
    data::message_count::MessageCountRepository,
    error::AppError,
    model::{
        message_count::{LeaderboardEntry, LeaderboardPage},
        pagination::Pagination,
    },
};

/// Service providing ranked, paginated access to the activity leaderboard.
pub struct LeaderboardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    /// Creates a new LeaderboardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LeaderboardService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of a guild's leaderboard.
    ///
    /// The requested page is clamped to the pages that currently hold rows, so a stale
    /// page number from an old button still renders the closest valid page. Ranks are
    /// global: the first entry of page `n` has rank `n * 10 + 1`.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `page` - Zero-indexed page requested by the caller
    ///
    /// # Returns
    /// - `Ok(LeaderboardPage)` - Ranked entries plus the clamped page and total rows
    /// - `Err(AppError::DbErr)` - Database error during count or query
    pub async fn get_page(&self, guild_id: u64, page: u64) -> Result<LeaderboardPage, AppError> {
        let repo = MessageCountRepository::new(self.db);

        let total = repo.count_by_guild(guild_id).await?;
        let pagination = Pagination::new(page).clamp(total);

        let rows = repo
            .get_leaderboard(guild_id, pagination.per_page, pagination.offset())
            .await?;

        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| LeaderboardEntry {
                rank: pagination.offset() + index as u64 + 1,
                user_id: row.user_id,
                counted: row.counted,
            })
            .collect();

        Ok(LeaderboardPage {
            entries,
            page: pagination.page,
            total,
        })
    }

    /// Number of users with points in a guild.
    pub async fn count(&self, guild_id: u64) -> Result<u64, AppError> {
        MessageCountRepository::new(self.db)
            .count_by_guild(guild_id)
            .await
    }

    /// Clears the whole leaderboard of a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users whose points were removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn reset_guild(&self, guild_id: u64) -> Result<u64, AppError> {
        let removed = MessageCountRepository::new(self.db)
            .reset_guild(guild_id)
            .await?;

        tracing::info!("Reset leaderboard of guild {} ({} rows)", guild_id, removed);

        Ok(removed)
    }

    /// Clears one user's points in a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The user's points were removed
    /// - `Ok(false)` - The user had no points
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn reset_user(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        MessageCountRepository::new(self.db)
            .reset_user(guild_id, user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    const GUILD_ID: u64 = 700_000_000_000_000_001;

    async fn seed(db: &DatabaseConnection, users: u64) -> Result<(), AppError> {
        // User n has 1000 - n points, so rank n belongs to user n
        for user_id in 1..=users {
            factory::create_message_count(db, GUILD_ID, user_id, 1000 - user_id as i32).await?;
        }
        Ok(())
    }

    /// Tests that page N holds rows [N·10, N·10+10) with global ranks.
    ///
    /// Expected: Ok with ranks 11..=20 on page 1
    #[tokio::test]
    async fn page_holds_its_window_with_global_ranks() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::MessageCount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        seed(db, 25).await?;

        let page = LeaderboardService::new(db).get_page(GUILD_ID, 1).await?;

        assert_eq!(page.page, 1);
        assert_eq!(page.total, 25);
        let ranks: Vec<u64> = page.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (11..=20).collect::<Vec<u64>>());
        assert!(page.entries.iter().all(|e| e.rank == e.user_id));

        Ok(())
    }

    /// Tests requesting a page past the end.
    ///
    /// Expected: Ok with the last page returned instead of an empty one
    #[tokio::test]
    async fn clamps_page_past_the_end() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::MessageCount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        seed(db, 25).await?;

        let page = LeaderboardService::new(db).get_page(GUILD_ID, 9).await?;

        assert_eq!(page.page, 2);
        assert_eq!(page.entries.len(), 5);
        assert_eq!(page.entries[0].rank, 21);

        Ok(())
    }

    /// Tests an empty leaderboard.
    ///
    /// Expected: Ok with page 0 and no entries
    #[tokio::test]
    async fn empty_leaderboard_has_single_empty_page() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::MessageCount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let page = LeaderboardService::new(db).get_page(GUILD_ID, 3).await?;

        assert_eq!(page.page, 0);
        assert_eq!(page.total, 0);
        assert!(page.entries.is_empty());

        Ok(())
    }
}
