use super::*;

/// Tests replacing the attributes of an existing team.
///
/// Expected: Ok with new values and unchanged id
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let mut changes = params("Olympiacos");
    changes.foundation_year = None;
    let updated = repo
        .update(UpdateTeamParams {
            id: team.id,
            changes,
        })
        .await?;

    assert_eq!(updated.id, team.id);
    assert_eq!(updated.team_name, "Olympiacos");
    assert!(updated.foundation_year.is_none());

    let stored = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo
        .update(UpdateTeamParams {
            id: 999,
            changes: params("Ghost"),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
