use super::*;

/// Tests creating a team and reading it back.
///
/// Verifies that the repository returns a generated id and that the stored row
/// carries every attribute from the parameters.
///
/// Expected: Ok with all fields equal to the input
#[tokio::test]
async fn creates_team_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let id = repo.create(params("Aris")).await?;

    let team = repo.find_by_id(id).await?.unwrap();
    assert_eq!(team.id, id);
    assert_eq!(team.team_name, "Aris");
    assert_eq!(team.foundation_year, Some(1914));
    assert_eq!(team.city_name, "Thessaloniki");
    assert_eq!(team.president_lastname.as_deref(), Some("Karipidis"));
    assert!(team.coach_firstname.is_none());

    Ok(())
}

/// Tests that consecutive inserts receive distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let first = repo.create(params("Aris")).await?;
    let second = repo.create(params("PAOK")).await?;

    assert_ne!(first, second);

    Ok(())
}
