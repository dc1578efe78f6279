use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, Timestamp,
};

use crate::{
    bot::command::{guild_id, require_keeper, respond},
    error::AppError,
    model::player::PlayerMapping,
    service::player::PlayerService,
    state::AppState,
    util::message::{truncate, EMBED_FIELD_LIMIT},
};

pub fn definition() -> CreateCommand {
    CreateCommand::new("players").description("List all registered players in this server")
}

pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;
    require_keeper(state, cmd, guild_id).await?;

    let players = PlayerService::new(&state.db).list().await?;
    if players.is_empty() {
        return respond(ctx, cmd, "No players have registered yet in this server.", true).await;
    }

    let server_name = guild_id
        .name(&ctx.cache)
        .unwrap_or_else(|| "this server".to_string());

    let embed = CreateEmbed::new()
        .title(format!("Registered Players in {}", server_name))
        .colour(0x0099FF)
        .description(format!("Total players: {}", players.len()))
        .field("Players", truncate(&player_lines(&players), EMBED_FIELD_LIMIT), false)
        .timestamp(Timestamp::now());

    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true);
    cmd.create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

fn player_lines(players: &[PlayerMapping]) -> String {
    players
        .iter()
        .map(|player| format!("<@{}> - **{}**", player.discord_id, player.player_name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn lists_one_player_per_line() {
        let players = vec![
            PlayerMapping {
                player_name: "Lanii".to_string(),
                discord_id: 1,
                created_at: Utc::now(),
            },
            PlayerMapping {
                player_name: "Drifter".to_string(),
                discord_id: 2,
                created_at: Utc::now(),
            },
        ];

        assert_eq!(
            player_lines(&players),
            "<@1> - **Lanii**\n<@2> - **Drifter**"
        );
    }
}
