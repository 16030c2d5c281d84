use super::*;

/// Tests the leaderboard ordering.
///
/// Verifies that rows are sorted by points descending and that ties are broken by
/// the most recent update.
///
/// Expected: Ok with rows ordered counted DESC, updated_at DESC
#[tokio::test]
async fn orders_by_points_then_recency() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (user_id, counted, age) in [(1u64, 5, 10i64), (2, 9, 10), (3, 5, 1), (4, 1, 1)] {
        factory::message_count::MessageCountFactory::new(db, GUILD_ID)
            .user_id(user_id)
            .counted(counted)
            .updated_at(factory::helpers::seconds_ago(age))
            .build()
            .await?;
    }

    let repo = MessageCountRepository::new(db);
    let rows = repo.get_leaderboard(GUILD_ID, 10, 0).await?;

    let user_ids: Vec<u64> = rows.iter().map(|r| r.user_id).collect();
    assert_eq!(user_ids, vec![2, 3, 1, 4]);

    Ok(())
}

/// Tests fetching a window of the leaderboard.
///
/// Verifies that limit and offset select rows `[offset, offset + limit)` of the
/// ordered leaderboard.
///
/// Expected: Ok with the second page of rows
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // User n has 100 - n points, so rank order equals user order
    for user_id in 1..=25u64 {
        factory::create_message_count(db, GUILD_ID, user_id, 100 - user_id as i32).await?;
    }

    let repo = MessageCountRepository::new(db);
    let rows = repo.get_leaderboard(GUILD_ID, 10, 10).await?;

    let user_ids: Vec<u64> = rows.iter().map(|r| r.user_id).collect();
    assert_eq!(user_ids, (11..=20).collect::<Vec<u64>>());

    let tail = repo.get_leaderboard(GUILD_ID, 10, 20).await?;
    assert_eq!(tail.len(), 5);

    Ok(())
}

/// Tests that other guilds' rows never appear.
///
/// Expected: Ok with only rows from the requested guild
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message_count(db, GUILD_ID, 1, 2).await?;
    factory::create_message_count(db, OTHER_GUILD_ID, 2, 50).await?;

    let repo = MessageCountRepository::new(db);
    let rows = repo.get_leaderboard(GUILD_ID, 10, 0).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, 1);

    Ok(())
}
