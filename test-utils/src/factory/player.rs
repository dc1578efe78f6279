//! Player factory for creating test player mapping rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating player name to Discord account mappings.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    player_name: String,
    discord_id: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - player_name: `"Player{id}"`
    /// - discord_id: `"{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            player_name: format!("Player{}", id),
            discord_id: id.to_string(),
        }
    }

    pub fn player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Builds and inserts the player row into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            player_name: ActiveValue::Set(self.player_name),
            discord_id: ActiveValue::Set(self.discord_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player mapping for `player_name` pointing at `discord_id`.
pub async fn create_player(
    db: &DatabaseConnection,
    player_name: &str,
    discord_id: u64,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db)
        .player_name(player_name)
        .discord_id(discord_id.to_string())
        .build()
        .await
}
