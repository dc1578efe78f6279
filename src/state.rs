//! State shared by every interaction handler.
//!
//! Built once at startup and cloned into the bot's event handler. Every field is
//! cheap to clone: `DatabaseConnection` is a pool and `reqwest::Client` is an `Arc`
//! internally.

use sea_orm::DatabaseConnection;

use crate::{config::Config, service::battle::roster::BattleBoardEndpoints};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for the battle board and game-info APIs.
    pub http_client: reqwest::Client,

    /// Base URLs of the battle board APIs.
    pub battle_board: BattleBoardEndpoints,

    /// Base URL of the game-info API.
    pub gameinfo_url: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            battle_board: BattleBoardEndpoints {
                albion_battles: config.albion_battles_api_url.clone(),
                albion_battles_eu: config.albion_battles_eu_api_url.clone(),
                albion_bb: config.albion_bb_api_url.clone(),
            },
            gameinfo_url: config.gameinfo_api_url.clone(),
        }
    }
}
