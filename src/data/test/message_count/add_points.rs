use super::*;

/// Tests adding points for a user without a row.
///
/// Expected: Ok with a new row holding the added points
#[tokio::test]
async fn creates_row_on_first_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageCountRepository::new(db);
    repo.add_points(GUILD_ID, 42, 1).await?;

    let count = repo.find(GUILD_ID, 42).await?.unwrap();
    assert_eq!(count.counted, 1);

    Ok(())
}

/// Tests adding points for a user who already has some.
///
/// Verifies that the stored value is incremented in place rather than replaced.
///
/// Expected: Ok with counted equal to the sum
#[tokio::test]
async fn increments_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message_count(db, GUILD_ID, 42, 5).await?;

    let repo = MessageCountRepository::new(db);
    repo.add_points(GUILD_ID, 42, 1).await?;
    repo.add_points(GUILD_ID, 42, 2).await?;

    let count = repo.find(GUILD_ID, 42).await?.unwrap();
    assert_eq!(count.counted, 8);
    assert_eq!(repo.count_by_guild(GUILD_ID).await?, 1);

    Ok(())
}

/// Tests that points are tracked separately per guild.
///
/// Expected: Ok with the other guild's row untouched
#[tokio::test]
async fn keeps_guilds_separate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message_count(db, OTHER_GUILD_ID, 42, 3).await?;

    let repo = MessageCountRepository::new(db);
    repo.add_points(GUILD_ID, 42, 1).await?;

    assert_eq!(repo.find(GUILD_ID, 42).await?.unwrap().counted, 1);
    assert_eq!(repo.find(OTHER_GUILD_ID, 42).await?.unwrap().counted, 3);

    Ok(())
}
