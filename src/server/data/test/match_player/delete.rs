use super::*;

/// Tests deleting one record by composite key.
///
/// Expected: Ok(1) and the record is gone
#[tokio::test]
async fn deletes_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (fixture, player, _record) = factory::helpers::create_match_player_with_dependencies(db).await?;

    let repo = MatchPlayerRepository::new(db);

    assert_eq!(repo.delete(fixture.id, player.id).await?, 1);
    assert!(repo
        .find_by_match_and_player(fixture.id, player.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests sweeping the records of several matches.
///
/// Expected: Ok(2) with the third match's record untouched
#[tokio::test]
async fn deletes_records_of_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (host, guest, first) = factory::helpers::create_match_with_teams(db).await?;
    let second = factory::create_match(db, guest.id, host.id).await?;
    let third = factory::create_match(db, host.id, guest.id).await?;
    let player = factory::create_player(db, host.id).await?;
    for fixture in [&first, &second, &third] {
        factory::create_match_player(db, fixture.id, player.id).await?;
    }

    let repo = MatchPlayerRepository::new(db);
    let deleted = repo.delete_by_matches(vec![first.id, second.id]).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.find_by_match(third.id).await?.len(), 1);
    assert_eq!(repo.delete_by_matches(vec![]).await?, 0);

    Ok(())
}

/// Tests sweeping every record of a player.
///
/// Expected: Ok(1) and no record left for the player
#[tokio::test]
async fn deletes_records_of_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (fixture, player, _record) = factory::helpers::create_match_player_with_dependencies(db).await?;

    let repo = MatchPlayerRepository::new(db);

    assert_eq!(repo.delete_by_player(player.id).await?, 1);
    assert!(repo.find_by_match(fixture.id).await?.is_empty());

    Ok(())
}
