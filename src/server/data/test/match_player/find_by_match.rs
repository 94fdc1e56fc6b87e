use super::*;

/// Tests listing the statistics of one match.
///
/// Expected: Ok with both players of the match ordered by player id
#[tokio::test]
async fn lists_records_of_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (host, guest, fixture) = factory::helpers::create_match_with_teams(db).await?;
    let other_match = factory::create_match(db, guest.id, host.id).await?;
    let a = factory::create_player(db, host.id).await?;
    let b = factory::create_player(db, guest.id).await?;
    factory::create_match_player(db, fixture.id, b.id).await?;
    factory::create_match_player(db, fixture.id, a.id).await?;
    factory::create_match_player(db, other_match.id, a.id).await?;

    let repo = MatchPlayerRepository::new(db);
    let records = repo.find_by_match(fixture.id).await?;

    let players: Vec<i32> = records.iter().map(|r| r.player_id).collect();
    assert_eq!(players, vec![a.id, b.id]);

    Ok(())
}
