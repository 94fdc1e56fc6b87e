use super::*;
use test_utils::factory::team::TeamFactory;

/// Tests case-sensitive prefix matching.
///
/// Verifies that SQLite's case-insensitive LIKE does not leak lower-case matches
/// and that results are ordered by id.
///
/// Expected: Ok with only the upper-case "Pa" teams, in insertion order
#[tokio::test]
async fn matches_prefix_case_sensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let panathinaikos = TeamFactory::new(db).team_name("Panathinaikos").build().await?;
    TeamFactory::new(db).team_name("paok fans").build().await?;
    let panionios = TeamFactory::new(db).team_name("Panionios").build().await?;
    TeamFactory::new(db).team_name("Aris").build().await?;

    let repo = TeamRepository::new(db);
    let teams = repo.find_by_name_prefix("Pa").await?;

    let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![panathinaikos.id, panionios.id]);

    Ok(())
}

/// Tests that an empty prefix returns every team.
///
/// Expected: Ok with all three teams
#[tokio::test]
async fn empty_prefix_matches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for _ in 0..3 {
        factory::create_team(db).await?;
    }

    let repo = TeamRepository::new(db);

    assert_eq!(repo.find_by_name_prefix("").await?.len(), 3);

    Ok(())
}

/// Tests that LIKE wildcards in the prefix are matched literally.
///
/// Expected: Ok with only the team whose name really starts with "A_"
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let literal = TeamFactory::new(db).team_name("A_Team").build().await?;
    TeamFactory::new(db).team_name("AEK").build().await?;
    TeamFactory::new(db).team_name("A%Team").build().await?;

    let repo = TeamRepository::new(db);
    let teams = repo.find_by_name_prefix("A_").await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, literal.id);

    Ok(())
}

/// Tests a prefix with no matches.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unknown_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_team(db).await?;

    let repo = TeamRepository::new(db);

    assert!(repo.find_by_name_prefix("Zzz").await?.is_empty());

    Ok(())
}
