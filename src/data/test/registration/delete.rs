use super::*;

/// Tests deleting an existing registration.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_registration(db).await?;
    let other = factory::create_registration(db).await?;

    let repo = RegistrationRepository::new(db);
    let deleted = repo.delete(created.user_id as u64).await?;

    assert!(deleted);
    assert!(repo.find_by_user_id(created.user_id as u64).await?.is_none());
    assert!(repo.find_by_user_id(other.user_id as u64).await?.is_some());

    Ok(())
}

/// Tests deleting a user who has no registration.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_nothing_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let deleted = repo.delete(5).await?;

    assert!(!deleted);

    Ok(())
}
