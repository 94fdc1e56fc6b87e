use super::*;

/// Tests replacing the statistics of an existing pair.
///
/// Expected: Ok with all four statistics replaced
#[tokio::test]
async fn replaces_statistics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (fixture, player, _record) = factory::helpers::create_match_player_with_dependencies(db).await?;

    let repo = MatchPlayerRepository::new(db);
    let updated = repo
        .update(MatchPlayerParams {
            match_id: fixture.id,
            player_id: player.id,
            play_time: 45,
            goals: 3,
            assists: 0,
            cards: 2,
        })
        .await?;

    assert_eq!(
        (updated.play_time, updated.goals, updated.assists, updated.cards),
        (45, 3, 0, 2)
    );

    Ok(())
}
