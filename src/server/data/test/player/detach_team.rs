use super::*;

/// Tests unlinking all players of a team.
///
/// Verifies that players of the team keep existing with `team_id` NULL while
/// players of other teams are untouched.
///
/// Expected: Ok(2) with only the other team's player still linked
#[tokio::test]
async fn unlinks_players_of_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;
    let a = factory::create_player(db, team.id).await?;
    factory::create_player(db, team.id).await?;
    let c = factory::create_player(db, other.id).await?;

    let repo = PlayerRepository::new(db);
    let detached = repo.detach_team(team.id).await?;

    assert_eq!(detached, 2);
    assert!(repo.find_by_id(a.id).await?.unwrap().team_id.is_none());
    assert_eq!(repo.find_by_id(c.id).await?.unwrap().team_id, Some(other.id));

    Ok(())
}
