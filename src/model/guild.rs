use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Guild configuration linking a Discord server to an Albion Online guild.
///
/// Created once per Discord server by `/init`. Holds the in-game guild players must
/// belong to when registering, plus the member and keeper roles used by commands.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRecord {
    /// Discord guild ID.
    pub guild_id: u64,
    /// Albion Online guild ID from the game-info API.
    pub albion_guild_id: String,
    /// Albion Online guild name, compared exactly against player guild names.
    pub albion_guild_name: String,
    /// Role granted to players on successful registration.
    pub member_role_id: Option<u64>,
    /// Role whose holders may run keeper commands.
    pub keeper_role_id: Option<u64>,
    /// When the guild was initialized.
    pub created_at: DateTime<Utc>,
}

impl GuildRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Parses the string IDs from the database into u64 values.
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - Successfully converted model
    /// - `Err(DbErr::Custom)` - Failed to parse one of the stored IDs as u64
    pub fn from_entity(entity: entity::guild::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            guild_id,
            albion_guild_id: entity.albion_guild_id,
            albion_guild_name: entity.albion_guild_name,
            member_role_id: parse_optional_id(entity.member_role_id, "member_role_id")?,
            keeper_role_id: parse_optional_id(entity.keeper_role_id, "keeper_role_id")?,
            created_at: entity.created_at,
        })
    }
}

fn parse_optional_id(value: Option<String>, column: &str) -> Result<Option<u64>, DbErr> {
    value
        .map(|v| {
            v.parse::<u64>()
                .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
        })
        .transpose()
}

/// Parameters for initializing a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGuildParam {
    pub guild_id: u64,
    pub albion_guild_id: String,
    pub albion_guild_name: String,
    pub member_role_id: Option<u64>,
    pub keeper_role_id: Option<u64>,
}
