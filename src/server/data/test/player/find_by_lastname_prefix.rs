use super::*;
use test_utils::factory::player::PlayerFactory;

/// Tests prefix search on last names.
///
/// Expected: Ok with only players whose last name starts with "Pap"
#[tokio::test]
async fn finds_players_by_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;
    let first = PlayerFactory::new(db, team.id).lastname("Papadopoulos").build().await?;
    let second = PlayerFactory::new(db, team.id).lastname("Papas").build().await?;
    PlayerFactory::new(db, team.id).lastname("papadakis").build().await?;
    PlayerFactory::new(db, team.id).lastname("Giannakopoulos").build().await?;

    let repo = PlayerRepository::new(db);
    let players = repo.find_by_lastname_prefix("Pap").await?;

    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an empty prefix returns every player, with or without team.
///
/// Expected: Ok with both players
#[tokio::test]
async fn empty_prefix_matches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;
    factory::create_player(db, team.id).await?;
    PlayerFactory::new(db, team.id).without_team().build().await?;

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.find_by_lastname_prefix("").await?.len(), 2);

    Ok(())
}
