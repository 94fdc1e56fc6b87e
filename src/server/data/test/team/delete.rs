use super::*;

/// Tests deleting an existing team.
///
/// Expected: Ok(1) and the team is gone
#[tokio::test]
async fn deletes_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let deleted = repo.delete(team.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(team.id).await?.is_none());

    Ok(())
}

/// Tests deleting a team id that was never stored.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);

    assert_eq!(repo.delete(42).await?, 0);

    Ok(())
}
