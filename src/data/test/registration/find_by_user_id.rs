use super::*;

/// Tests finding an existing registration by Discord id.
///
/// Expected: Ok(Some) with the stored values
#[tokio::test]
async fn finds_existing_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::registration::RegistrationFactory::new(db)
        .nickname("Goose")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let found = repo.find_by_user_id(created.user_id as u64).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().nickname, "Goose");

    Ok(())
}

/// Tests looking up a user who never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_registration(db).await?;

    let repo = RegistrationRepository::new(db);
    let found = repo.find_by_user_id(999_999_999_999).await?;

    assert!(found.is_none());

    Ok(())
}
