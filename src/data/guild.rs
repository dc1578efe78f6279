//! Guild repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::guild::{CreateGuildParam, GuildRecord};

/// Repository for guild configuration rows.
pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new guild configuration.
    ///
    /// The `guild_id` column is unique, so initializing the same Discord server twice
    /// fails with a unique constraint violation rather than creating a second record.
    ///
    /// # Arguments
    /// - `param` - Discord guild, Albion guild and role configuration
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - The created guild
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateGuildParam) -> Result<GuildRecord, DbErr> {
        let entity = entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            albion_guild_id: ActiveValue::Set(param.albion_guild_id),
            albion_guild_name: ActiveValue::Set(param.albion_guild_name),
            member_role_id: ActiveValue::Set(param.member_role_id.map(|id| id.to_string())),
            keeper_role_id: ActiveValue::Set(param.keeper_role_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        GuildRecord::from_entity(entity)
    }

    /// Finds a guild by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(GuildRecord))`: Guild has been initialized
    /// - `Ok(None)`: Guild has not been initialized
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildRecord>, DbErr> {
        entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(GuildRecord::from_entity)
            .transpose()
    }
}
