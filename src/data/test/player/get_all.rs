use super::*;

/// Tests listing every mapping.
///
/// Expected: Ok with mappings ordered by player name
#[tokio::test]
async fn lists_mappings_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, "Zed", 3).await?;
    factory::create_player(db, "Alpha", 1).await?;
    factory::create_player(db, "Mid", 2).await?;

    let repo = PlayerRepository::new(db);
    let all = repo.get_all().await?;

    let names: Vec<&str> = all.iter().map(|m| m.player_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zed"]);

    Ok(())
}

/// Tests listing with no mappings.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_mappings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let all = repo.get_all().await?;

    assert!(all.is_empty());

    Ok(())
}
