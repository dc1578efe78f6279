//! Player mapping repository for database operations.
//!
//! Player names are unique at the database level. Inserting a name that is already
//! mapped fails with a unique constraint violation which callers translate into an
//! "already registered" outcome; there is no check-then-insert.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::player::PlayerMapping;

/// Repository for player name to Discord account mappings.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Maps a player name to a Discord account.
    ///
    /// # Arguments
    /// - `player_name` - In-game player name
    /// - `discord_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(PlayerMapping)` - The created mapping
    /// - `Err(DbErr)` - Database error, including a unique violation for a mapped name
    pub async fn create(&self, player_name: &str, discord_id: u64) -> Result<PlayerMapping, DbErr> {
        let entity = entity::prelude::Player::insert(entity::player::ActiveModel {
            player_name: ActiveValue::Set(player_name.to_string()),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        PlayerMapping::from_entity(entity)
    }

    /// Deletes the mapping of a player name.
    ///
    /// # Returns
    /// - `Ok(true)` - A mapping was deleted
    /// - `Ok(false)` - The player name was not mapped
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_name(&self, player_name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_many()
            .filter(entity::player::Column::PlayerName.eq(player_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Looks up the mappings of many player names in one query.
    ///
    /// Names are matched exactly. Names without a mapping are simply absent from
    /// the result.
    ///
    /// # Arguments
    /// - `names` - Player names to look up
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerMapping>)` - Mappings found for the given names
    /// - `Err(DbErr)` - Database error during query or a stored ID failed to parse
    pub async fn find_by_names(&self, names: &[String]) -> Result<Vec<PlayerMapping>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Player::find()
            .filter(entity::player::Column::PlayerName.is_in(names.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(PlayerMapping::from_entity)
            .collect()
    }

    /// Gets every mapping ordered by player name.
    pub async fn get_all(&self) -> Result<Vec<PlayerMapping>, DbErr> {
        entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::PlayerName)
            .all(self.db)
            .await?
            .into_iter()
            .map(PlayerMapping::from_entity)
            .collect()
    }
}
