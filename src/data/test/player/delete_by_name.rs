use super::*;

/// Tests unmapping a mapped player.
///
/// Expected: Ok(true) and row removed
#[tokio::test]
async fn deletes_existing_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, "Lanii", 1).await?;
    factory::create_player(db, "Other", 2).await?;

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete_by_name("Lanii").await?;

    assert!(deleted);
    let rows = entity::prelude::Player::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_name, "Other");

    Ok(())
}

/// Tests unmapping a name that was never mapped.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete_by_name("Nobody").await?;

    assert!(!deleted);

    Ok(())
}
