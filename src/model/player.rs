use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Association between an in-game player name and a Discord account.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMapping {
    /// In-game player name, unique across all mappings.
    pub player_name: String,
    /// Discord user ID the player belongs to.
    pub discord_id: u64,
    pub created_at: DateTime<Utc>,
}

impl PlayerMapping {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PlayerMapping)` - Successfully converted model
    /// - `Err(DbErr::Custom)` - Failed to parse discord_id as u64
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, DbErr> {
        let discord_id = entity
            .discord_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse discord_id: {}", e)))?;

        Ok(Self {
            player_name: entity.player_name,
            discord_id,
            created_at: entity.created_at,
        })
    }
}

/// Result of storing a new player mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum MapOutcome {
    /// The mapping was stored.
    Mapped(PlayerMapping),
    /// A mapping for this player name already exists.
    AlreadyMapped,
}

/// Player found on the game-info API and cleared for registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationCandidate {
    /// Player name as spelled by the game-info API.
    pub player_name: String,
    /// Albion guild the player belongs to.
    pub guild_name: String,
    /// Role granted once the registration is confirmed.
    pub member_role_id: u64,
}

/// Player names read from a mass mapping upload, split by mapping state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassMapPlan {
    /// Names that already have a mapping, in upload order.
    pub already_mapped: Vec<PlayerMapping>,
    /// Names still waiting for a Discord account, in upload order.
    pub pending: Vec<String>,
}
