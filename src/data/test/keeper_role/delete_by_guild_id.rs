use super::*;

/// Tests clearing every keeper role of a guild.
///
/// Expected: Ok with number of removed rows, other guilds untouched
#[tokio::test]
async fn clears_guild_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KeeperRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_keeper_role(db, "1", "10").await?;
    factory::create_keeper_role(db, "1", "20").await?;
    factory::create_keeper_role(db, "2", "30").await?;

    let repo = KeeperRoleRepository::new(db);
    let removed = repo.delete_by_guild_id(1).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_guild_id(1).await?.is_empty());
    assert_eq!(repo.get_by_guild_id(2).await?, vec![30]);

    Ok(())
}
