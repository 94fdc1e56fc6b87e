use super::*;

/// Tests that a team's matches include both home and away games.
///
/// Expected: Ok with the hosted and the visited match, not the unrelated one
#[tokio::test]
async fn finds_host_and_guest_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let c = factory::create_team(db).await?;
    let home = factory::create_match(db, team.id, b.id).await?;
    let away = factory::create_match(db, c.id, team.id).await?;
    factory::create_match(db, b.id, c.id).await?;

    let repo = MatchRepository::new(db);
    let matches = repo.find_by_team(team.id).await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![home.id, away.id]);

    Ok(())
}
