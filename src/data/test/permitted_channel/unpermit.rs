use super::*;

/// Tests removing a permitted channel.
///
/// Expected: Ok(true) and the channel no longer counts
#[tokio::test]
async fn unpermits_existing_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PermittedChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_permitted_channel(db, GUILD_ID, 1001).await?;
    factory::create_permitted_channel(db, GUILD_ID, 1002).await?;

    let repo = PermittedChannelRepository::new(db);
    let removed = repo.unpermit(GUILD_ID, 1001).await?;

    assert!(removed);
    assert!(!repo.is_permitted(GUILD_ID, 1001).await?);
    assert!(repo.is_permitted(GUILD_ID, 1002).await?);

    Ok(())
}

/// Tests removing a channel that was never permitted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PermittedChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermittedChannelRepository::new(db);
    let removed = repo.unpermit(GUILD_ID, 1001).await?;

    assert!(!removed);

    Ok(())
}
