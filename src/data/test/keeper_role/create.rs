use super::*;

/// Tests adding a keeper role.
///
/// Expected: Ok and role readable afterwards
#[tokio::test]
async fn creates_keeper_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KeeperRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KeeperRoleRepository::new(db);
    repo.create(1, 10).await?;

    assert_eq!(repo.get_by_guild_id(1).await?, vec![10]);

    Ok(())
}

/// Tests adding the same keeper role twice.
///
/// Expected: Err with a unique constraint violation, one row kept
#[tokio::test]
async fn rejects_duplicate_keeper_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KeeperRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KeeperRoleRepository::new(db);
    repo.create(1, 10).await?;
    let result = repo.create(1, 10).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.get_by_guild_id(1).await?, vec![10]);

    Ok(())
}
