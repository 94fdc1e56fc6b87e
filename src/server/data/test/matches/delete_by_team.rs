use super::*;

/// Tests deleting every match of a team.
///
/// Expected: Ok(2) with only the unrelated match remaining
#[tokio::test]
async fn deletes_host_and_guest_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let c = factory::create_team(db).await?;
    factory::create_match(db, team.id, b.id).await?;
    factory::create_match(db, c.id, team.id).await?;
    let unrelated = factory::create_match(db, b.id, c.id).await?;

    let repo = MatchRepository::new(db);
    let deleted = repo.delete_by_team(team.id).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.find_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, unrelated.id);

    Ok(())
}
