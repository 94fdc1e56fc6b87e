use super::*;

/// Tests finding matches played on a given date.
///
/// Expected: Ok with only the two matches on 4 October
#[tokio::test]
async fn finds_matches_on_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let c = factory::create_team(db).await?;
    let first = MatchFactory::new(db, a.id, b.id).match_date(date(4)).build().await?;
    let second = MatchFactory::new(db, c.id, a.id).match_date(date(4)).build().await?;
    MatchFactory::new(db, b.id, c.id).match_date(date(5)).build().await?;

    let repo = MatchRepository::new(db);
    let matches = repo.find_by_date(date(4)).await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a date without matches.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_free_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::create_match_with_teams(db).await?;

    let repo = MatchRepository::new(db);

    assert!(repo.find_by_date(date(20)).await?.is_empty());

    Ok(())
}

/// Tests listing all matches ordered by date.
///
/// Expected: Ok with the earlier match first regardless of insertion order
#[tokio::test]
async fn lists_all_matches_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let later = MatchFactory::new(db, a.id, b.id).match_date(date(9)).build().await?;
    let earlier = MatchFactory::new(db, b.id, a.id).match_date(date(2)).build().await?;

    let repo = MatchRepository::new(db);
    let matches = repo.find_all().await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
