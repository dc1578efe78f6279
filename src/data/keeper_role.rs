//! Keeper role repository for database operations.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository for the keeper roles configured per Discord guild.
pub struct KeeperRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KeeperRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the keeper role IDs of a guild in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - Configured keeper role IDs, empty if none
    /// - `Err(DbErr)` - Database error or a stored role ID failed to parse
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<u64>, DbErr> {
        entity::prelude::KeeperRole::find()
            .filter(entity::keeper_role::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::keeper_role::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|model| {
                model
                    .role_id
                    .parse::<u64>()
                    .map_err(|e| DbErr::Custom(format!("Failed to parse role_id: {}", e)))
            })
            .collect()
    }

    /// Adds a keeper role to a guild.
    ///
    /// A role already configured for the guild violates the unique
    /// `(guild_id, role_id)` index.
    pub async fn create(&self, guild_id: u64, role_id: u64) -> Result<(), DbErr> {
        entity::prelude::KeeperRole::insert(entity::keeper_role::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            role_id: ActiveValue::Set(role_id.to_string()),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Removes a keeper role from a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The role was removed
    /// - `Ok(false)` - The role was not a keeper role
    pub async fn delete(&self, guild_id: u64, role_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::KeeperRole::delete_many()
            .filter(entity::keeper_role::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::keeper_role::Column::RoleId.eq(role_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every keeper role of a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of removed roles
    pub async fn delete_by_guild_id(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::KeeperRole::delete_many()
            .filter(entity::keeper_role::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
