use super::*;

/// Tests listing every registration.
///
/// Verifies the list is ordered by most recent update so freshly edited entries
/// appear on the first userbase page.
///
/// Expected: Ok with all registrations, newest first
#[tokio::test]
async fn lists_registrations_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (user_id, age) in [(10u64, 300i64), (11, 5), (12, 60)] {
        factory::registration::RegistrationFactory::new(db)
            .user_id(user_id)
            .updated_at(factory::helpers::seconds_ago(age))
            .build()
            .await?;
    }

    let repo = RegistrationRepository::new(db);
    let all = repo.get_all().await?;

    let user_ids: Vec<u64> = all.iter().map(|r| r.user_id).collect();
    assert_eq!(user_ids, vec![11, 12, 10]);

    Ok(())
}

/// Tests listing with an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_registrations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let all = repo.get_all().await?;

    assert!(all.is_empty());

    Ok(())
}
