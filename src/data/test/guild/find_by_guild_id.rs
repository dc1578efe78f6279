use super::*;

/// Tests finding an initialized guild.
///
/// Expected: Ok(Some) with matching guild
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Guild).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .albion_guild_name("Lanii Keepers")
        .keeper_role_id(Some("300".to_string()))
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id(100).await?;

    assert!(guild.is_some());
    let guild = guild.unwrap();
    assert_eq!(guild.albion_guild_name, "Lanii Keepers");
    assert_eq!(guild.keeper_role_id, Some(300));

    Ok(())
}

/// Tests looking up a server that never ran `/init`.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_uninitialized_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Guild).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild(db).await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id(999_999_999).await?;

    assert!(guild.is_none());

    Ok(())
}

/// Tests a stored role ID that is not numeric.
///
/// Expected: Err(DbErr::Custom) from the domain conversion
#[tokio::test]
async fn fails_on_corrupt_role_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Guild).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .member_role_id(Some("not-a-number".to_string()))
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let result = repo.find_by_guild_id(100).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
