use super::*;

/// Tests counting leaderboard rows per guild.
///
/// Expected: Ok with the number of users that have points in the guild
#[tokio::test]
async fn counts_rows_in_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for user_id in 1..=3u64 {
        factory::create_message_count(db, GUILD_ID, user_id, 1).await?;
    }
    factory::create_message_count(db, OTHER_GUILD_ID, 1, 1).await?;

    let repo = MessageCountRepository::new(db);

    assert_eq!(repo.count_by_guild(GUILD_ID).await?, 3);
    assert_eq!(repo.count_by_guild(OTHER_GUILD_ID).await?, 1);
    assert_eq!(repo.count_by_guild(1).await?, 0);

    Ok(())
}
