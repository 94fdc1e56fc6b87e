use super::*;

/// Tests replacing the host team of a match.
///
/// Verifies that the old host no longer sees the match in its team view and the
/// new host does.
///
/// Expected: Ok with the match moved to the new host
#[tokio::test]
async fn moves_match_to_new_host() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (old_host, guest, fixture) = factory::helpers::create_match_with_teams(db).await?;
    let new_host = factory::create_team(db).await?;

    let repo = MatchRepository::new(db);
    let updated = repo
        .update(UpdateMatchParams {
            id: fixture.id,
            changes: CreateMatchParams {
                match_date: date(12),
                goals_host: 3,
                goals_guest: 0,
                host_team_id: new_host.id,
                guest_team_id: guest.id,
            },
        })
        .await?;

    assert_eq!(updated.host_team_id, new_host.id);
    assert_eq!(updated.goals_host, 3);
    assert!(repo.find_by_team(old_host.id).await?.is_empty());
    assert_eq!(repo.find_by_team(new_host.id).await?.len(), 1);

    Ok(())
}
