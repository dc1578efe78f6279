//! `/massmap`: maps a whole list of players in one go.
//!
//! The keeper uploads a `.txt` file with one player name per line. Names that are
//! already mapped are skipped; for every other name the bot asks the keeper to pick
//! the Discord account, or to skip the name, within 60 seconds.

use std::time::Duration;

use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, CommandInteraction, CommandOptionType, ComponentInteraction,
    ComponentInteractionDataKind, Context, CreateActionRow, CreateButton, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateSelectMenu, CreateSelectMenuKind,
};

use crate::{
    bot::command::{attachment_option, edit, followup, guild_id, require_keeper, required},
    error::AppError,
    model::player::{MapOutcome, PlayerMapping},
    service::player::{parse_player_list, PlayerService},
    state::AppState,
    util::message::join_names,
};

const USER_SELECT_ID: &str = "massmap_user";
const SKIP_ID: &str = "massmap_skip";
const ANSWER_TIMEOUT: Duration = Duration::from_secs(60);

pub fn definition() -> CreateCommand {
    CreateCommand::new("massmap")
        .description("Map every player listed in a text file")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Attachment,
                "file",
                "A .txt file with one player name per line",
            )
            .required(true),
        )
}

pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;
    require_keeper(state, cmd, guild_id).await?;

    let options = cmd.data.options();
    let file = required(attachment_option(&options, "file"), "file")?;
    if !file.filename.ends_with(".txt") {
        return Err(AppError::BadRequest("Please attach a .txt file.".to_string()));
    }

    cmd.defer(&ctx.http).await?;

    let text = state
        .http_client
        .get(&file.url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let names = parse_player_list(&text);
    if names.is_empty() {
        return edit(ctx, cmd, "No player names found in the file.").await;
    }

    let players = PlayerService::new(&state.db);
    let plan = players.mass_map_plan(&names).await?;
    tracing::info!(
        "Mass mapping {} players ({} already mapped) for {}",
        names.len(),
        plan.already_mapped.len(),
        cmd.user.id
    );

    edit(
        ctx,
        cmd,
        format!(
            "Found {} player names. Starting mapping process...",
            names.len()
        ),
    )
    .await?;

    if !plan.already_mapped.is_empty() {
        followup(ctx, cmd, already_mapped_message(&plan.already_mapped), false).await?;
    }

    let total = plan.pending.len();
    let mut mapped = Vec::new();
    let mut skipped = Vec::new();
    for (index, name) in plan.pending.iter().enumerate() {
        if map_one(&players, ctx, cmd, name, index + 1, total).await? {
            mapped.push(name.clone());
        } else {
            skipped.push(name.clone());
        }
    }

    followup(
        ctx,
        cmd,
        format!(
            "All players have been processed.\nMapped: {}\nSkipped: {}",
            join_names(&mapped),
            join_names(&skipped)
        ),
        false,
    )
    .await?;

    Ok(())
}

/// Prompts for the Discord account of one player and maps it.
///
/// # Returns
/// - `Ok(true)` - The player was mapped
/// - `Ok(false)` - The keeper skipped the player, did not answer, or the name was
///   mapped in the meantime
async fn map_one(
    players: &PlayerService<'_>,
    ctx: &Context,
    cmd: &CommandInteraction,
    name: &str,
    position: usize,
    total: usize,
) -> Result<bool, AppError> {
    let components = vec![
        CreateActionRow::SelectMenu(
            CreateSelectMenu::new(USER_SELECT_ID, CreateSelectMenuKind::User { default_users: None })
                .placeholder("Discord user"),
        ),
        CreateActionRow::Buttons(vec![CreateButton::new(SKIP_ID)
            .label("Skip")
            .style(ButtonStyle::Secondary)]),
    ];
    let prompt = cmd
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(format!(
                    "[{}/{}] Please choose the Discord user for **{}**.",
                    position, total, name
                ))
                .components(components),
        )
        .await?;

    let Some(answer) = prompt
        .await_component_interaction(&ctx.shard)
        .author_id(cmd.user.id)
        .timeout(ANSWER_TIMEOUT)
        .await
    else {
        followup(
            ctx,
            cmd,
            format!("No response received for **{}**. Skipping...", name),
            false,
        )
        .await?;
        return Ok(false);
    };

    let Some(discord_id) = selected_user(&answer) else {
        answer_with(ctx, &answer, format!("Skipped **{}**.", name)).await?;
        return Ok(false);
    };

    match players.map(name, discord_id).await? {
        MapOutcome::Mapped(_) => {
            answer_with(ctx, &answer, format!("Mapped **{}** to <@{}>", name, discord_id)).await?;
            Ok(true)
        }
        MapOutcome::AlreadyMapped => {
            answer_with(ctx, &answer, format!("**{}** is already mapped. Skipping...", name))
                .await?;
            Ok(false)
        }
    }
}

/// User picked in the select menu, `None` for the skip button.
fn selected_user(answer: &ComponentInteraction) -> Option<u64> {
    match &answer.data.kind {
        ComponentInteractionDataKind::UserSelect { values } => values.first().map(|id| id.get()),
        _ => None,
    }
}

/// Replaces a prompt with its outcome, removing the components.
async fn answer_with(
    ctx: &Context,
    answer: &ComponentInteraction,
    content: String,
) -> Result<(), AppError> {
    answer
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .components(vec![]),
            ),
        )
        .await?;

    Ok(())
}

fn already_mapped_message(mappings: &[PlayerMapping]) -> String {
    mappings
        .iter()
        .map(|m| format!("**{}** is already mapped to <@{}>. Skipping...", m.player_name, m.discord_id))
        .collect::<Vec<_>>()
        .join("\n")
}
