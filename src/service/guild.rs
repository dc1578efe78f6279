use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::guild::GuildRepository,
    error::AppError,
    model::guild::{CreateGuildParam, GuildRecord},
    service::gameinfo::GameInfoSearch,
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a Discord server to an Albion Online guild.
    ///
    /// Looks the guild up by name on the game-info API, ignoring case, and stores the
    /// API's spelling of the name. A server can only be initialized once; the unique
    /// guild_id column rejects a second record.
    ///
    /// # Arguments
    /// - `gameinfo` - Game-info search client
    /// - `guild_id` - Discord guild ID
    /// - `guild_name` - Albion guild name as typed by the administrator
    /// - `member_role_id` - Role granted to players on registration
    /// - `keeper_role_id` - Role allowed to run keeper commands
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - The stored configuration
    /// - `Err(AppError::NotFound)` - No Albion guild with that name
    /// - `Err(AppError::BadRequest)` - The server is already initialized
    /// - `Err(AppError::ReqwestErr)` / `Err(AppError::DbErr)` - Upstream or database failure
    pub async fn initialize<S>(
        &self,
        gameinfo: &S,
        guild_id: u64,
        guild_name: &str,
        member_role_id: Option<u64>,
        keeper_role_id: Option<u64>,
    ) -> Result<GuildRecord, AppError>
    where
        S: GameInfoSearch + ?Sized,
    {
        let search = gameinfo.search(guild_name).await?;
        let albion_guild = search
            .find_guild(guild_name)
            .ok_or_else(|| AppError::NotFound("Guild not found.".to_string()))?;

        let repo = GuildRepository::new(self.db);
        let result = repo
            .create(CreateGuildParam {
                guild_id,
                albion_guild_id: albion_guild.id.clone(),
                albion_guild_name: albion_guild.name.clone(),
                member_role_id,
                keeper_role_id,
            })
            .await;

        match result {
            Ok(guild) => {
                tracing::info!(
                    "Initialized guild {} for Albion guild {}",
                    guild_id,
                    guild.albion_guild_name
                );
                Ok(guild)
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Err(
                AppError::BadRequest("This server already has a guild.".to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    /// Gets the configuration of a server, if it was initialized.
    pub async fn get(&self, guild_id: u64) -> Result<Option<GuildRecord>, AppError> {
        let repo = GuildRepository::new(self.db);

        Ok(repo.find_by_guild_id(guild_id).await?)
    }
}
