use super::*;

/// Tests the batched lookup used by identity resolution.
///
/// Verifies that only mapped names are returned and unmapped names are simply
/// absent from the result.
///
/// Expected: Ok with mappings for mapped names only
#[tokio::test]
async fn returns_only_mapped_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, "A", 11).await?;
    factory::create_player(db, "C", 33).await?;

    let repo = PlayerRepository::new(db);
    let mut found = repo
        .find_by_names(&["A".to_string(), "B".to_string(), "C".to_string()])
        .await?;
    found.sort_by(|a, b| a.player_name.cmp(&b.player_name));

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].player_name, "A");
    assert_eq!(found[0].discord_id, 11);
    assert_eq!(found[1].player_name, "C");
    assert_eq!(found[1].discord_id, 33);

    Ok(())
}

/// Tests that lookup is an exact match.
///
/// Expected: Ok with no results for a differently cased name
#[tokio::test]
async fn matches_names_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, "Lanii", 1).await?;

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_names(&["lanii".to_string()]).await?;

    assert!(found.is_empty());

    Ok(())
}

/// Tests lookup with no names.
///
/// Expected: Ok with empty result
#[tokio::test]
async fn returns_empty_for_no_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, "Lanii", 1).await?;

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_names(&[]).await?;

    assert!(found.is_empty());

    Ok(())
}
