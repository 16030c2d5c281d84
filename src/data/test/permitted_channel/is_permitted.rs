use super::*;

/// Tests that the allow-list is scoped per guild.
///
/// Verifies that permitting a channel id in one guild does not permit it in
/// another guild.
///
/// Expected: Ok(true) for the owning guild, Ok(false) otherwise
#[tokio::test]
async fn is_scoped_to_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PermittedChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_permitted_channel(db, GUILD_ID, 1001).await?;

    let repo = PermittedChannelRepository::new(db);

    assert!(repo.is_permitted(GUILD_ID, 1001).await?);
    assert!(!repo.is_permitted(OTHER_GUILD_ID, 1001).await?);
    assert!(!repo.is_permitted(GUILD_ID, 1002).await?);

    Ok(())
}
