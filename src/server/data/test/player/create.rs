use super::*;

/// Tests creating a player linked to an existing team.
///
/// Expected: Ok with the stored player pointing at the team
#[tokio::test]
async fn creates_player_linked_to_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;

    let repo = PlayerRepository::new(db);
    let id = repo.create(params("Athanasiadis", team.id)).await?;

    let player = repo.find_by_id(id).await?.unwrap();
    assert_eq!(player.lastname, "Athanasiadis");
    assert_eq!(player.team_id, Some(team.id));
    assert_eq!(player.date_of_birth, chrono::NaiveDate::from_ymd_opt(1999, 1, 30));

    Ok(())
}

/// Tests that the declared foreign key rejects an unknown team.
///
/// Expected: Err from the database and no player stored
#[tokio::test]
async fn rejects_unknown_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.create(params("Nobody", 777)).await;

    assert!(result.is_err());
    assert!(repo.find_by_lastname_prefix("").await?.is_empty());

    Ok(())
}
