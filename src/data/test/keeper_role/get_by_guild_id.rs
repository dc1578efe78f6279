use super::*;

/// Tests reading the keeper roles of one guild.
///
/// Verifies that roles of other guilds are excluded and insertion order is kept.
///
/// Expected: Ok with the guild's role IDs
#[tokio::test]
async fn returns_roles_for_guild_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KeeperRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_keeper_role(db, "1", "30").await?;
    factory::create_keeper_role(db, "2", "99").await?;
    factory::create_keeper_role(db, "1", "10").await?;

    let repo = KeeperRoleRepository::new(db);
    let roles = repo.get_by_guild_id(1).await?;

    assert_eq!(roles, vec![30, 10]);

    Ok(())
}

/// Tests a guild with no keeper roles.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KeeperRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KeeperRoleRepository::new(db);
    let roles = repo.get_by_guild_id(1).await?;

    assert!(roles.is_empty());

    Ok(())
}
