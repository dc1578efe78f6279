use super::*;

/// Tests mapping a new player name.
///
/// Expected: Ok with mapping created
#[tokio::test]
async fn creates_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let mapping = repo.create("Lanii", 151003631204696064).await?;

    assert_eq!(mapping.player_name, "Lanii");
    assert_eq!(mapping.discord_id, 151003631204696064);

    let count = entity::prelude::Player::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests mapping a player name that is already mapped.
///
/// Verifies that uniqueness is enforced by the database constraint and the
/// existing mapping is left untouched.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_player_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, "Lanii", 1).await?;

    let repo = PlayerRepository::new(db);
    let result = repo.create("Lanii", 2).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    let rows = entity::prelude::Player::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].discord_id, "1");

    Ok(())
}

/// Tests that one Discord account can own several player names.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_multiple_names_per_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Player).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.create("Lanii", 1).await?;
    repo.create("LaniiAlt", 1).await?;

    let count = entity::prelude::Player::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
