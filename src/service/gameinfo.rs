//! Client for the Albion Online game-info search API.

use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::{error::AppError, model::gameinfo::GameInfoSearchResult};

pub const GAMEINFO_API_URL: &str = "https://gameinfo.albiononline.com/api/gameinfo";

/// Name search over Albion Online guilds and players.
#[async_trait]
pub trait GameInfoSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<GameInfoSearchResult, AppError>;
}

pub struct GameInfoClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GameInfoClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl GameInfoSearch for GameInfoClient {
    /// Searches guilds and players by name.
    ///
    /// # Returns
    /// - `Ok(GameInfoSearchResult)` - Matching guilds and players, possibly empty
    /// - `Err(AppError::ReqwestErr)` - The API is unreachable, returned an error status
    ///   or a malformed body
    async fn search(&self, query: &str) -> Result<GameInfoSearchResult, AppError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        tracing::debug!("Searching game info for {}", query);

        let result = self
            .http_client
            .get(url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json::<GameInfoSearchResult>()
            .await?;

        Ok(result)
    }
}
