use super::*;

/// Tests resetting one user's count.
///
/// Expected: Ok(true) with the rest of the leaderboard intact
#[tokio::test]
async fn deletes_only_that_user() -> Result<(), AppError> {
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
    let removed = repo.reset_user(GUILD_ID, 1).await?;

    assert!(removed);
    assert!(repo.find(GUILD_ID, 1).await?.is_none());
    assert!(repo.find(GUILD_ID, 2).await?.is_some());
    assert!(repo.find(OTHER_GUILD_ID, 1).await?.is_some());

    Ok(())
}

/// Tests resetting a user without points.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_user_without_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageCountRepository::new(db);

    assert!(!repo.reset_user(GUILD_ID, 1).await?);

    Ok(())
}
