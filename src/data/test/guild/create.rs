use super::*;

fn param(guild_id: u64) -> CreateGuildParam {
    CreateGuildParam {
        guild_id,
        albion_guild_id: "Xq1yZ3Hv".to_string(),
        albion_guild_name: "Lanii Keepers".to_string(),
        member_role_id: Some(200),
        keeper_role_id: None,
    }
}

/// Tests creating a guild configuration.
///
/// Verifies that the repository stores every field and returns a domain model with
/// the Discord IDs parsed back into u64 values.
///
/// Expected: Ok with guild created
#[tokio::test]
async fn creates_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Guild).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.create(param(100)).await?;

    assert_eq!(guild.guild_id, 100);
    assert_eq!(guild.albion_guild_name, "Lanii Keepers");
    assert_eq!(guild.member_role_id, Some(200));
    assert_eq!(guild.keeper_role_id, None);

    let rows = entity::prelude::Guild::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].guild_id, "100");

    Ok(())
}

/// Tests initializing the same Discord guild twice.
///
/// Verifies that the unique guild_id column rejects the second insert so a server
/// can only ever hold one configuration.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_second_guild_for_same_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Guild).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let result = repo.create(param(100)).await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
