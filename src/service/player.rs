//! Player mapping and registration.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};
use std::collections::{HashMap, HashSet};

use crate::{
    data::{guild::GuildRepository, player::PlayerRepository},
    error::AppError,
    model::player::{MapOutcome, MassMapPlan, PlayerMapping, RegistrationCandidate},
    service::gameinfo::GameInfoSearch,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Maps a player name to a Discord account.
    ///
    /// The unique player_name column decides whether the name is already taken; the
    /// existing mapping is never overwritten.
    ///
    /// # Returns
    /// - `Ok(MapOutcome::Mapped)` - The mapping was stored
    /// - `Ok(MapOutcome::AlreadyMapped)` - The player name was already mapped
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn map(&self, player_name: &str, discord_id: u64) -> Result<MapOutcome, AppError> {
        let repo = PlayerRepository::new(self.db);

        match repo.create(player_name, discord_id).await {
            Ok(mapping) => {
                tracing::info!("Mapped player {} to Discord user {}", player_name, discord_id);
                Ok(MapOutcome::Mapped(mapping))
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::warn!("Player {} is already mapped", player_name);
                Ok(MapOutcome::AlreadyMapped)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the mapping of a player name.
    ///
    /// # Returns
    /// - `Ok(true)` - The mapping was removed
    /// - `Ok(false)` - The player name was not mapped
    pub async fn unmap(&self, player_name: &str) -> Result<bool, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.delete_by_name(player_name).await?)
    }

    /// Lists every mapping ordered by player name.
    pub async fn list(&self) -> Result<Vec<PlayerMapping>, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Splits uploaded player names into mapped and still unmapped names.
    ///
    /// One batched lookup decides the split. Repeated names are considered once.
    pub async fn mass_map_plan(&self, names: &[String]) -> Result<MassMapPlan, AppError> {
        let mut mappings: HashMap<String, PlayerMapping> = PlayerRepository::new(self.db)
            .find_by_names(names)
            .await?
            .into_iter()
            .map(|mapping| (mapping.player_name.clone(), mapping))
            .collect();

        let mut plan = MassMapPlan::default();
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_str()) {
                continue;
            }
            match mappings.remove(name) {
                Some(mapping) => plan.already_mapped.push(mapping),
                None => plan.pending.push(name.clone()),
            }
        }

        Ok(plan)
    }

    /// Checks that a player may register in a Discord server.
    ///
    /// The server must be initialized with a member role, the first game-info search
    /// hit for `player_name` must be in a guild, and that guild must be the server's
    /// Albion guild.
    ///
    /// # Arguments
    /// - `gameinfo` - Game-info search client
    /// - `guild_id` - Discord guild ID of the server
    /// - `player_name` - Player name as typed by the user
    ///
    /// # Returns
    /// - `Ok(RegistrationCandidate)` - Player and role to use once confirmed
    /// - `Err(AppError::NotFound)` - Server not initialized or player unknown
    /// - `Err(AppError::BadRequest)` - No member role, player guildless or in another guild
    pub async fn registration_candidate<S>(
        &self,
        gameinfo: &S,
        guild_id: u64,
        player_name: &str,
    ) -> Result<RegistrationCandidate, AppError>
    where
        S: GameInfoSearch + ?Sized,
    {
        let guild = GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "This server has not been initialized. Ask an administrator to run /init."
                        .to_string(),
                )
            })?;

        let member_role_id = guild.member_role_id.ok_or_else(|| {
            tracing::error!("No member role configured for guild {}", guild_id);
            AppError::BadRequest("Error: No member role configured for this guild.".to_string())
        })?;

        let search = gameinfo.search(player_name).await?;
        let player = search.players.into_iter().next().ok_or_else(|| {
            tracing::warn!("Player not found in Albion Online: {}", player_name);
            AppError::NotFound("Player not found.".to_string())
        })?;

        let player_guild = player
            .guild()
            .ok_or_else(|| AppError::BadRequest("Player is not in a guild.".to_string()))?;

        if player_guild != guild.albion_guild_name {
            tracing::warn!(
                "Guild mismatch for player {}: {} != {}",
                player.name,
                player_guild,
                guild.albion_guild_name
            );
            return Err(AppError::BadRequest(format!(
                "Player's guild ({}) does not match this server's associated guild ({}).",
                player_guild, guild.albion_guild_name
            )));
        }

        Ok(RegistrationCandidate {
            guild_name: player_guild.to_string(),
            player_name: player.name,
            member_role_id,
        })
    }
}

/// Reads one player name per line, trimming whitespace and skipping blank lines.
pub fn parse_player_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
