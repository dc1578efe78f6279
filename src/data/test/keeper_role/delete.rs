use super::*;

/// Tests removing a configured keeper role.
///
/// Expected: Ok(true) and other roles untouched
#[tokio::test]
async fn deletes_configured_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KeeperRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_keeper_role(db, "1", "10").await?;
    factory::create_keeper_role(db, "1", "20").await?;

    let repo = KeeperRoleRepository::new(db);

    assert!(repo.delete(1, 10).await?);
    assert_eq!(repo.get_by_guild_id(1).await?, vec![20]);

    Ok(())
}

/// Tests removing a role that is not configured.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KeeperRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_keeper_role(db, "2", "10").await?;

    let repo = KeeperRoleRepository::new(db);

    assert!(!repo.delete(1, 10).await?);
    assert_eq!(repo.get_by_guild_id(2).await?, vec![10]);

    Ok(())
}
