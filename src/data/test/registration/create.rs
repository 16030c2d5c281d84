use super::*;

/// Tests creating a registration for a user without one.
///
/// Expected: Ok(Some) with the stored values
#[tokio::test]
async fn inserts_first_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .create(UpsertRegistrationParam {
            user_id: 123456789,
            discord_tag: "pilot".to_string(),
            nickname: "Maverick".to_string(),
            external_id: "SP-001".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(registration.user_id, 123456789);
    assert_eq!(registration.nickname, "Maverick");
    assert_eq!(registration.external_id, "SP-001");

    Ok(())
}

/// Tests creating a registration for a user who already has one.
///
/// Verifies that the existing row is neither overwritten nor duplicated.
///
/// Expected: Ok(None) with the original values kept
#[tokio::test]
async fn leaves_existing_registration_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::registration::RegistrationFactory::new(db)
        .user_id(123456789)
        .nickname("Original")
        .external_id("SP-001")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let result = repo
        .create(UpsertRegistrationParam {
            user_id: 123456789,
            discord_tag: "pilot".to_string(),
            nickname: "Changed".to_string(),
            external_id: "SP-999".to_string(),
        })
        .await?;

    assert!(result.is_none());

    let stored = repo.find_by_user_id(123456789).await?.unwrap();
    assert_eq!(stored.nickname, "Original");
    assert_eq!(stored.external_id, "SP-001");
    assert_eq!(entity::prelude::Registration::find().count(db).await?, 1);

    Ok(())
}
