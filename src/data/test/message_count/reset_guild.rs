use super::*;

/// Tests resetting a guild's leaderboard.
///
/// Verifies that every row of the guild is deleted and that other guilds keep
/// their counts.
///
/// Expected: Ok with the number of deleted rows
#[tokio::test]
async fn deletes_only_that_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message_count(db, GUILD_ID, 1, 4).await?;
    factory::create_message_count(db, GUILD_ID, 2, 7).await?;
    factory::create_message_count(db, OTHER_GUILD_ID, 1, 9).await?;

    let repo = MessageCountRepository::new(db);
    let deleted = repo.reset_guild(GUILD_ID).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.count_by_guild(GUILD_ID).await?, 0);
    assert_eq!(repo.count_by_guild(OTHER_GUILD_ID).await?, 1);

    Ok(())
}

/// Tests resetting a guild without any counts.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageCountRepository::new(db);

    assert_eq!(repo.reset_guild(GUILD_ID).await?, 0);

    Ok(())
}
