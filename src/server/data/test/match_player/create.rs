use super::*;

/// Tests storing statistics for a (match, player) pair.
///
/// Expected: Ok with the record retrievable by its composite key
#[tokio::test]
async fn creates_record_for_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (host, _guest, fixture) = factory::helpers::create_match_with_teams(db).await?;
    let player = factory::create_player(db, host.id).await?;

    let repo = MatchPlayerRepository::new(db);
    repo.create(params(fixture.id, player.id)).await?;

    let record = repo
        .find_by_match_and_player(fixture.id, player.id)
        .await?
        .unwrap();
    assert_eq!(record.play_time, 75);
    assert_eq!(record.assists, 2);

    Ok(())
}

/// Tests that the composite primary key rejects a duplicate pair.
///
/// Expected: Err on the second insert and the first record unchanged
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (fixture, player, _record) = factory::helpers::create_match_player_with_dependencies(db).await?;

    let repo = MatchPlayerRepository::new(db);
    let result = repo.create(params(fixture.id, player.id)).await;

    assert!(result.is_err());
    let stored = repo
        .find_by_match_and_player(fixture.id, player.id)
        .await?
        .unwrap();
    assert_eq!(stored.play_time, 90);

    Ok(())
}
