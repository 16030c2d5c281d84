use super::*;

/// Tests creating a registration for a user without one.
///
/// Verifies that the repository inserts a new row holding the given tag, nickname
/// and external id.
///
/// Expected: Ok with registration created
#[tokio::test]
async fn creates_new_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .upsert(UpsertRegistrationParam {
            user_id: 123456789,
            discord_tag: "pilot".to_string(),
            nickname: "Maverick".to_string(),
            external_id: "SP-001".to_string(),
        })
        .await?;

    assert_eq!(registration.user_id, 123456789);
    assert_eq!(registration.discord_tag, "pilot");
    assert_eq!(registration.nickname, "Maverick");
    assert_eq!(registration.external_id, "SP-001");

    Ok(())
}

/// Tests upserting twice for the same user.
///
/// Verifies that the second write overwrites the first instead of adding a second
/// row for the same user id.
///
/// Expected: Ok with exactly one row holding the latest values
#[tokio::test]
async fn overwrites_existing_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    for (nickname, external_id) in [("First", "ID-1"), ("Second", "ID-2")] {
        repo.upsert(UpsertRegistrationParam {
            user_id: 42,
            discord_tag: "pilot".to_string(),
            nickname: nickname.to_string(),
            external_id: external_id.to_string(),
        })
        .await?;
    }

    let rows = entity::prelude::Registration::find().count(db).await?;
    assert_eq!(rows, 1);

    let stored = repo.find_by_user_id(42).await?.unwrap();
    assert_eq!(stored.nickname, "Second");
    assert_eq!(stored.external_id, "ID-2");

    Ok(())
}

/// Tests that an overwrite keeps the original creation time.
///
/// Verifies that `created_at` is left untouched on conflict while `updated_at`
/// moves forward.
///
/// Expected: Ok with created_at older than updated_at
#[tokio::test]
async fn keeps_created_at_on_overwrite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::registration::RegistrationFactory::new(db)
        .user_id(77)
        .updated_at(factory::helpers::seconds_ago(3600))
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let updated = repo
        .upsert(UpsertRegistrationParam {
            user_id: 77,
            discord_tag: "renamed".to_string(),
            nickname: "New".to_string(),
            external_id: "NEW".to_string(),
        })
        .await?;

    assert_eq!(updated.discord_tag, "renamed");
    assert!(updated.created_at < updated.updated_at);

    Ok(())
}
