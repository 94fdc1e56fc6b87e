use super::*;

/// Tests exact username lookup.
///
/// Expected: Ok(Some) for the stored name and Ok(None) for a different case
#[tokio::test]
async fn finds_user_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = UserFactory::new(db).username("coach").build().await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_username("coach").await?.unwrap();
    assert_eq!(found.id, stored.id);
    assert!(repo.find_by_username("Coach").await?.is_none());

    Ok(())
}
