use super::*;

/// Tests permitting a new channel.
///
/// Expected: Ok(true) and the channel is permitted afterwards
#[tokio::test]
async fn permits_new_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PermittedChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermittedChannelRepository::new(db);
    let added = repo.permit(GUILD_ID, 1001).await?;

    assert!(added);
    assert!(repo.is_permitted(GUILD_ID, 1001).await?);

    Ok(())
}

/// Tests permitting a channel that is already on the allow-list.
///
/// Verifies that the second call is a no-op rather than a conflict error.
///
/// Expected: Ok(false) with a single row stored
#[tokio::test]
async fn permitting_twice_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PermittedChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_permitted_channel(db, GUILD_ID, 1001).await?;

    let repo = PermittedChannelRepository::new(db);
    let added = repo.permit(GUILD_ID, 1001).await?;

    assert!(!added);
    assert_eq!(repo.get_by_guild(GUILD_ID).await?.len(), 1);

    Ok(())
}
