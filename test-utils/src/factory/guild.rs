//! Guild factory for creating test guild configuration rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .guild_id("987654321")
///     .albion_guild_name("Lanii Keepers")
///     .member_role_id(Some("555".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    albion_guild_id: String,
    albion_guild_name: String,
    member_role_id: Option<String>,
    keeper_role_id: Option<String>,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"{id}"` where id is auto-incremented
    /// - albion_guild_id: `"albion_{id}"`
    /// - albion_guild_name: `"Guild {id}"`
    /// - member_role_id / keeper_role_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            albion_guild_id: format!("albion_{}", id),
            albion_guild_name: format!("Guild {}", id),
            member_role_id: None,
            keeper_role_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn albion_guild_id(mut self, albion_guild_id: impl Into<String>) -> Self {
        self.albion_guild_id = albion_guild_id.into();
        self
    }

    pub fn albion_guild_name(mut self, albion_guild_name: impl Into<String>) -> Self {
        self.albion_guild_name = albion_guild_name.into();
        self
    }

    pub fn member_role_id(mut self, member_role_id: Option<String>) -> Self {
        self.member_role_id = member_role_id;
        self
    }

    pub fn keeper_role_id(mut self, keeper_role_id: Option<String>) -> Self {
        self.keeper_role_id = keeper_role_id;
        self
    }

    /// Builds and inserts the guild row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            albion_guild_id: ActiveValue::Set(self.albion_guild_id),
            albion_guild_name: ActiveValue::Set(self.albion_guild_name),
            member_role_id: ActiveValue::Set(self.member_role_id),
            keeper_role_id: ActiveValue::Set(self.keeper_role_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
