use super::*;

/// Tests listing the permitted channels of a guild.
///
/// Expected: Ok with only that guild's channels, ordered by channel id
#[tokio::test]
async fn lists_guild_channels_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PermittedChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_permitted_channel(db, GUILD_ID, 3003).await?;
    factory::create_permitted_channel(db, GUILD_ID, 1001).await?;
    factory::create_permitted_channel(db, OTHER_GUILD_ID, 2002).await?;

    let repo = PermittedChannelRepository::new(db);
    let channels = repo.get_by_guild(GUILD_ID).await?;

    let ids: Vec<u64> = channels.iter().map(|c| c.channel_id).collect();
    assert_eq!(ids, vec![1001, 3003]);
    assert!(channels.iter().all(|c| c.guild_id == GUILD_ID));

    Ok(())
}
