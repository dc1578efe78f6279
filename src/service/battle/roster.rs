//! Battle roster retrieval from the battle board APIs.
//!
//! albionbattles.com serves a flat player list for any set of battles. albionbb.com
//! only serves kill events, so its roster is every killer and victim. Both rosters are
//! deduplicated by player name right after retrieval.

use async_trait::async_trait;
use dioxus_logger::tracing;
use serde::Deserialize;
use std::collections::HashSet;

use crate::{
    error::battle::BattleBoardError,
    model::battle::{BattleBoard, BattleParticipant, BattleReference, Region},
};

pub const ALBION_BATTLES_API_URL: &str = "https://api.albionbattles.com";
pub const ALBION_BATTLES_EU_API_URL: &str = "https://api-eu.albionbattles.com";
pub const ALBION_BB_API_URL: &str = "https://api.albionbb.com";

/// Base URLs of the battle board APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleBoardEndpoints {
    pub albion_battles: String,
    pub albion_battles_eu: String,
    pub albion_bb: String,
}

impl Default for BattleBoardEndpoints {
    fn default() -> Self {
        Self {
            albion_battles: ALBION_BATTLES_API_URL.to_string(),
            albion_battles_eu: ALBION_BATTLES_EU_API_URL.to_string(),
            albion_bb: ALBION_BB_API_URL.to_string(),
        }
    }
}

impl BattleBoardEndpoints {
    /// Builds the single request URL fetching the roster of every referenced battle.
    pub fn roster_url(&self, reference: &BattleReference) -> String {
        let ids = reference.ids.join(",");

        match reference.board {
            BattleBoard::AlbionBattles => {
                let base = match reference.region {
                    Region::Americas => &self.albion_battles,
                    Region::Europe => &self.albion_battles_eu,
                };
                format!("{}/battles/multilog/{}", base.trim_end_matches('/'), ids)
            }
            BattleBoard::AlbionBb => {
                let region = match reference.region {
                    Region::Americas => "us",
                    Region::Europe => "eu",
                };
                format!(
                    "{}/{}/battles/kills?ids={}",
                    self.albion_bb.trim_end_matches('/'),
                    region,
                    ids
                )
            }
        }
    }
}

/// Source of battle participants.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetches the combined, name-deduplicated roster of every referenced battle.
    async fn fetch_roster(
        &self,
        reference: &BattleReference,
    ) -> Result<Vec<BattleParticipant>, BattleBoardError>;
}

/// HTTP client for the battle board APIs.
pub struct BattleBoardClient {
    http_client: reqwest::Client,
    endpoints: BattleBoardEndpoints,
}

impl BattleBoardClient {
    pub fn new(http_client: reqwest::Client, endpoints: BattleBoardEndpoints) -> Self {
        Self {
            http_client,
            endpoints,
        }
    }
}

#[async_trait]
impl RosterSource for BattleBoardClient {
    async fn fetch_roster(
        &self,
        reference: &BattleReference,
    ) -> Result<Vec<BattleParticipant>, BattleBoardError> {
        let url = self.endpoints.roster_url(reference);
        tracing::debug!("Fetching battle roster from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let roster = match reference.board {
            BattleBoard::AlbionBattles => response.json::<MultilogResponse>().await?.participants(),
            BattleBoard::AlbionBb => kill_participants(response.json::<Vec<KillEvent>>().await?),
        };

        Ok(dedupe_by_name(roster))
    }
}

/// Fetches a roster, degrading any failure to an empty roster.
///
/// The failure is logged; callers cannot tell an unreachable board from a battle
/// without participants.
pub async fn fetch_roster_or_empty<S>(source: &S, reference: &BattleReference) -> Vec<BattleParticipant>
where
    S: RosterSource + ?Sized,
{
    match source.fetch_roster(reference).await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!(
                "Failed to fetch roster for battles {}: {}",
                reference.ids.join(","),
                e
            );
            Vec::new()
        }
    }
}

/// Keeps the first participant seen for every name.
pub fn dedupe_by_name(roster: Vec<BattleParticipant>) -> Vec<BattleParticipant> {
    let mut seen = HashSet::new();
    roster
        .into_iter()
        .filter(|participant| seen.insert(participant.name.clone()))
        .collect()
}

/// Response of `GET /battles/multilog/{ids}` on albionbattles.com.
#[derive(Debug, Deserialize)]
struct MultilogResponse {
    players: MultilogPlayers,
}

#[derive(Debug, Deserialize)]
struct MultilogPlayers {
    #[serde(default)]
    players: Vec<MultilogPlayer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MultilogPlayer {
    name: String,
    #[serde(default)]
    guild_name: Option<String>,
}

impl MultilogResponse {
    fn participants(self) -> Vec<BattleParticipant> {
        self.players
            .players
            .into_iter()
            .map(|p| BattleParticipant::new(p.name, p.guild_name.unwrap_or_default()))
            .collect()
    }
}

/// One entry of `GET /{region}/battles/kills?ids={ids}` on albionbb.com.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct KillEvent {
    killer: KillParticipant,
    victim: KillParticipant,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct KillParticipant {
    name: String,
    #[serde(default)]
    guild_name: Option<String>,
}

fn kill_participants(events: Vec<KillEvent>) -> Vec<BattleParticipant> {
    events
        .into_iter()
        .flat_map(|event| [event.killer, event.victim])
        .map(|p| BattleParticipant::new(p.name, p.guild_name.unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::battle::reference::parse_board_url;

    #[test]
    fn builds_albion_battles_urls_per_region() {
        let endpoints = BattleBoardEndpoints::default();

        let us = parse_board_url("https://albionbattles.com/battles/1").unwrap();
        assert_eq!(
            endpoints.roster_url(&us),
            "https://api.albionbattles.com/battles/multilog/1"
        );

        let eu = parse_board_url("https://eu.albionbattles.com/battles/1").unwrap();
        assert_eq!(
            endpoints.roster_url(&eu),
            "https://api-eu.albionbattles.com/battles/multilog/1"
        );
    }

    #[test]
    fn builds_albion_bb_urls_with_joined_ids() {
        let endpoints = BattleBoardEndpoints::default();

        let us = parse_board_url("https://albionbb.com/battles/multi?ids=1,2").unwrap();
        assert_eq!(
            endpoints.roster_url(&us),
            "https://api.albionbb.com/us/battles/kills?ids=1,2"
        );

        let eu = parse_board_url("https://europe.albionbb.com/battles/7").unwrap();
        assert_eq!(
            endpoints.roster_url(&eu),
            "https://api.albionbb.com/eu/battles/kills?ids=7"
        );
    }

    #[test]
    fn reads_multilog_players() {
        let body = r#"{
            "players": {
                "players": [
                    {"name": "A", "guildName": "G", "kills": 3},
                    {"name": "B", "guildName": null},
                    {"name": "C"}
                ]
            }
        }"#;

        let response: MultilogResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            response.participants(),
            vec![
                BattleParticipant::new("A", "G"),
                BattleParticipant::new("B", ""),
                BattleParticipant::new("C", ""),
            ]
        );
    }

    #[test]
    fn reads_killers_and_victims() {
        let body = r#"[
            {"Killer": {"Name": "A", "GuildName": "G"}, "Victim": {"Name": "X", "GuildName": "H"}},
            {"Killer": {"Name": "Y", "GuildName": "H"}, "Victim": {"Name": "B", "GuildName": "G"}}
        ]"#;

        let events: Vec<KillEvent> = serde_json::from_str(body).unwrap();
        let names: Vec<String> = kill_participants(events)
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["A", "X", "Y", "B"]);
    }

    #[test]
    fn dedupes_keeping_first_encounter() {
        let roster = vec![
            BattleParticipant::new("A", "G"),
            BattleParticipant::new("B", "G"),
            BattleParticipant::new("A", "H"),
        ];

        assert_eq!(
            dedupe_by_name(roster),
            vec![
                BattleParticipant::new("A", "G"),
                BattleParticipant::new("B", "G"),
            ]
        );
    }

    #[tokio::test]
    async fn degrades_unreachable_board_to_empty_roster() {
        let client = BattleBoardClient::new(
            reqwest::Client::new(),
            BattleBoardEndpoints {
                albion_battles: "http://127.0.0.1:9".to_string(),
                albion_battles_eu: "http://127.0.0.1:9".to_string(),
                albion_bb: "http://127.0.0.1:9".to_string(),
            },
        );
        let reference = parse_board_url("https://albionbattles.com/battles/1").unwrap();

        assert!(client.fetch_roster(&reference).await.is_err());
        assert!(fetch_roster_or_empty(&client, &reference).await.is_empty());
    }
}
