use super::*;

/// Tests reverse lookup when several users share one external id.
///
/// Verifies that every matching row is returned, most recently updated first, and
/// that rows with other ids are left out.
///
/// Expected: Ok with two registrations in updated_at descending order
#[tokio::test]
async fn returns_all_matches_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::registration::RegistrationFactory::new(db)
        .user_id(1)
        .external_id("SHARED")
        .updated_at(factory::helpers::seconds_ago(120))
        .build()
        .await?;
    factory::registration::RegistrationFactory::new(db)
        .user_id(2)
        .external_id("SHARED")
        .updated_at(factory::helpers::seconds_ago(10))
        .build()
        .await?;
    factory::registration::RegistrationFactory::new(db)
        .user_id(3)
        .external_id("OTHER")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let matches = repo.find_by_external_id("SHARED").await?;

    let user_ids: Vec<u64> = matches.iter().map(|r| r.user_id).collect();
    assert_eq!(user_ids, vec![2, 1]);

    Ok(())
}

/// Tests reverse lookup with an id nobody registered.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_external_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_registration(db).await?;

    let repo = RegistrationRepository::new(db);
    let matches = repo.find_by_external_id("does-not-exist").await?;

    assert!(matches.is_empty());

    Ok(())
}
