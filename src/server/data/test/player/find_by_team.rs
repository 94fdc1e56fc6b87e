use super::*;

/// Tests listing the players of one team.
///
/// Expected: Ok with only the players linked to the requested team
#[tokio::test]
async fn lists_players_of_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;
    let a = factory::create_player(db, team.id).await?;
    let b = factory::create_player(db, team.id).await?;
    factory::create_player(db, other.id).await?;

    let repo = PlayerRepository::new(db);
    let players = repo.find_by_team(team.id).await?;

    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}
