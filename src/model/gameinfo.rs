//! Payloads of the Albion Online game-info search API.

use serde::Deserialize;

/// Response of `GET /search?q={name}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameInfoSearchResult {
    #[serde(default)]
    pub guilds: Vec<GameInfoGuild>,
    #[serde(default)]
    pub players: Vec<GameInfoPlayer>,
}

/// Guild entry of a game-info search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameInfoGuild {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "AllianceName", default)]
    pub alliance_name: Option<String>,
}

/// Player entry of a game-info search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameInfoPlayer {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "GuildName", default)]
    pub guild_name: Option<String>,
}

impl GameInfoSearchResult {
    /// Finds the guild whose name matches `name` ignoring ASCII case.
    pub fn find_guild(&self, name: &str) -> Option<&GameInfoGuild> {
        self.guilds
            .iter()
            .find(|guild| guild.name.eq_ignore_ascii_case(name))
    }
}

impl GameInfoPlayer {
    /// The player's guild, treating the API's empty string as no guild.
    pub fn guild(&self) -> Option<&str> {
        self.guild_name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_RESPONSE: &str = r#"{
        "guilds": [
            {"Id": "g1", "Name": "Lanii Keepers", "AllianceId": "", "AllianceName": "", "KillFame": null, "DeathFame": 0},
            {"Id": "g2", "Name": "Lanii Keepers II", "AllianceId": "a1", "AllianceName": "ALLY"}
        ],
        "players": [
            {"Id": "p1", "Name": "Lanii", "GuildId": "g1", "GuildName": "Lanii Keepers", "AllianceId": "", "Avatar": "", "KillFame": 10, "DeathFame": 20},
            {"Id": "p2", "Name": "Drifter", "GuildId": "", "GuildName": ""}
        ]
    }"#;

    #[test]
    fn deserializes_search_response() {
        let result: GameInfoSearchResult = serde_json::from_str(SEARCH_RESPONSE).unwrap();

        assert_eq!(result.guilds.len(), 2);
        assert_eq!(result.players.len(), 2);
        assert_eq!(result.players[0].guild(), Some("Lanii Keepers"));
        assert_eq!(result.players[1].guild(), None);
    }

    #[test]
    fn finds_guild_ignoring_case() {
        let result: GameInfoSearchResult = serde_json::from_str(SEARCH_RESPONSE).unwrap();

        let guild = result.find_guild("lanii keepers").unwrap();
        assert_eq!(guild.id, "g1");
        assert!(result.find_guild("Lanii").is_none());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let result: GameInfoSearchResult = serde_json::from_str("{}").unwrap();

        assert!(result.guilds.is_empty());
        assert!(result.players.is_empty());
    }
}
