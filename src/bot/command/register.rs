//! `/register`: a player links their in-game character to their Discord account.
//!
//! The character is looked up on the game-info API and must belong to the server's
//! Albion guild. The invoker then confirms with a button within 30 seconds, after
//! which the mapping is stored and the server's member role is granted.

use std::time::Duration;

use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, CommandInteraction, CommandOptionType, Context, CreateActionRow, CreateButton,
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, User,
};

use crate::{
    bot::command::{followup, guild_id, required, respond, string_option, user_option},
    error::AppError,
    model::player::MapOutcome,
    service::{gameinfo::GameInfoClient, player::PlayerService},
    state::AppState,
    util::parse::role_id,
};

const CONFIRM_ID: &str = "confirm_registration";
const CANCEL_ID: &str = "cancel_registration";
const CONFIRM_TIMEOUT: Duration = Duration::from_secs(30);

pub fn definition() -> CreateCommand {
    CreateCommand::new("register")
        .description("Register a user to the guild")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "player", "The player's ign to register")
                .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::User,
            "user",
            "The user to register",
        ))
}

pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;

    let options = cmd.data.options();
    let player = required(string_option(&options, "player"), "player")?;
    let target = user_option(&options, "user");
    let discord_id = target.map(|user| user.id).unwrap_or(cmd.user.id);

    respond(
        ctx,
        cmd,
        format!(
            "{} is attempting to register {}{}",
            cmd.user.name,
            player,
            on_behalf_of(target)
        ),
        false,
    )
    .await?;

    let gameinfo = GameInfoClient::new(state.http_client.clone(), state.gameinfo_url.clone());
    let players = PlayerService::new(&state.db);
    let candidate = players
        .registration_candidate(&gameinfo, guild_id.get(), player)
        .await?;
    tracing::info!(
        "Found player {} in guild {}",
        candidate.player_name,
        candidate.guild_name
    );

    let buttons = CreateActionRow::Buttons(vec![
        CreateButton::new(CONFIRM_ID)
            .label("Confirm Registration")
            .style(ButtonStyle::Success),
        CreateButton::new(CANCEL_ID)
            .label("Cancel")
            .style(ButtonStyle::Danger),
    ]);
    let prompt = cmd
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(format!(
                    "Found player {} in guild {}. Click the button below to confirm registration.",
                    candidate.player_name, candidate.guild_name
                ))
                .components(vec![buttons])
                .ephemeral(true),
        )
        .await?;

    let Some(press) = prompt
        .await_component_interaction(&ctx.shard)
        .author_id(cmd.user.id)
        .timeout(CONFIRM_TIMEOUT)
        .await
    else {
        tracing::warn!("Registration of {} timed out", candidate.player_name);
        followup(ctx, cmd, "Registration timed out or failed.", false).await?;
        return Ok(());
    };

    if press.data.custom_id == CANCEL_ID {
        tracing::info!("Registration cancelled by {}", cmd.user.name);
        press
            .create_response(&ctx.http, update_prompt("Registration cancelled."))
            .await?;
        followup(
            ctx,
            cmd,
            format!("Registration cancelled by {}", cmd.user.name),
            false,
        )
        .await?;
        return Ok(());
    }

    press
        .create_response(&ctx.http, update_prompt("Processing registration..."))
        .await?;

    if let MapOutcome::AlreadyMapped = players
        .map(&candidate.player_name, discord_id.get())
        .await?
    {
        followup(ctx, cmd, "Player already registered.", false).await?;
        return Ok(());
    }

    let member_role = role_id(candidate.member_role_id)?;
    let granted = match guild_id.member(&ctx.http, discord_id).await {
        Ok(member) => member.add_role(&ctx.http, member_role).await,
        Err(e) => Err(e),
    };
    if let Err(e) = granted {
        tracing::error!("Failed to assign member role to {}: {}", discord_id, e);
        followup(
            ctx,
            cmd,
            "Player registered but failed to assign member role. Please contact an administrator.",
            false,
        )
        .await?;
        return Ok(());
    }

    tracing::info!(
        "Registered player {} for Discord user {}",
        candidate.player_name,
        discord_id
    );
    followup(
        ctx,
        cmd,
        format!(
            "✅ Successfully registered {}{} and assigned member role.",
            candidate.player_name,
            on_behalf_of(target)
        ),
        false,
    )
    .await?;

    Ok(())
}

fn on_behalf_of(target: Option<&User>) -> String {
    target
        .map(|user| format!(" for {}", user.name))
        .unwrap_or_default()
}

fn update_prompt(content: &str) -> CreateInteractionResponse {
    CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .content(content)
            .components(vec![]),
    )
}
