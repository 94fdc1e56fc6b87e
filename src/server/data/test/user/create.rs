use super::*;

/// Tests storing a login account.
///
/// Expected: Ok with the hash stored as given
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "admin".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        })
        .await?;

    assert_eq!(user.username, "admin");
    assert_eq!(user.password_hash, "$argon2id$stub");

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db).username("admin").build().await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "admin".to_string(),
            password_hash: "other".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
