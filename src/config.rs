use crate::{
    error::{config::ConfigError, AppError},
    service::{
        battle::roster::{ALBION_BATTLES_API_URL, ALBION_BATTLES_EU_API_URL, ALBION_BB_API_URL},
        gameinfo::GAMEINFO_API_URL,
    },
};

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub albion_battles_api_url: String,
    pub albion_battles_eu_api_url: String,
    pub albion_bb_api_url: String,
    pub gameinfo_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            albion_battles_api_url: optional("ALBION_BATTLES_API_URL", ALBION_BATTLES_API_URL),
            albion_battles_eu_api_url: optional(
                "ALBION_BATTLES_EU_API_URL",
                ALBION_BATTLES_EU_API_URL,
            ),
            albion_bb_api_url: optional("ALBION_BB_API_URL", ALBION_BB_API_URL),
            gameinfo_api_url: optional("GAMEINFO_API_URL", GAMEINFO_API_URL),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
