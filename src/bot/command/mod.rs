//! Slash commands.
//!
//! Each command module exposes a `definition()` used for registration and a `run()`
//! invoked by [`dispatch`]. Commands return `AppError` for anything that should end
//! the interaction; `dispatch` turns it into an ephemeral reply.

pub mod battle;
pub mod help;
pub mod init;
pub mod keeper;
pub mod map;
pub mod massmap;
pub mod ping;
pub mod players;
pub mod register;
pub mod role;
pub mod unmap;

use dioxus_logger::tracing;
use serenity::all::{
    Attachment, CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EditInteractionResponse,
    GuildId, Member, Message, ResolvedOption, ResolvedValue, Role, User,
};

use crate::{
    error::{permission::PermissionError, AppError},
    service::{
        guild::GuildService,
        keeper::KeeperRoleService,
        permission::{check_role_hierarchy, held_roles, is_administrator, is_keeper},
    },
    state::AppState,
    util::message::{truncate, MESSAGE_LIMIT},
};

/// Definitions of every slash command, registered globally on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        ping::definition(),
        help::definition(),
        init::definition(),
        register::definition(),
        map::definition(),
        massmap::definition(),
        unmap::definition(),
        players::definition(),
        battle::definition(),
        role::add_definition(),
        role::remove_definition(),
        keeper::definition(),
    ]
}

/// Runs the command named by the interaction and replies with any error.
pub async fn dispatch(state: &AppState, ctx: &Context, cmd: &CommandInteraction) {
    let name = cmd.data.name.as_str();
    tracing::info!("/{} invoked by {} ({})", name, cmd.user.name, cmd.user.id);

    let result = match name {
        "ping" => ping::run(ctx, cmd).await,
        "help" => help::run(ctx, cmd).await,
        "init" => init::run(state, ctx, cmd).await,
        "register" => register::run(state, ctx, cmd).await,
        "map" => map::run(state, ctx, cmd).await,
        "massmap" => massmap::run(state, ctx, cmd).await,
        "unmap" => unmap::run(state, ctx, cmd).await,
        "players" => players::run(state, ctx, cmd).await,
        "battle" => battle::run(state, ctx, cmd).await,
        "addrole" => role::run_add(state, ctx, cmd).await,
        "removerole" => role::run_remove(state, ctx, cmd).await,
        "keeper" => keeper::run(state, ctx, cmd).await,
        _ => {
            tracing::warn!("Received unknown command /{}", name);
            Ok(())
        }
    };

    match result {
        Ok(()) => tracing::info!("/{} finished", name),
        Err(e) => {
            if let AppError::PermissionErr(ref reason) = e {
                tracing::warn!("/{} refused for {}: {}", name, cmd.user.id, reason);
            }
            reply_error(ctx, cmd, &e).await;
        }
    }
}

/// Replies with the error, as a follow-up if the interaction was already acknowledged.
async fn reply_error(ctx: &Context, cmd: &CommandInteraction, err: &AppError) {
    let content = truncate(&err.to_reply(), MESSAGE_LIMIT);

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content.clone())
            .ephemeral(true),
    );
    if cmd.create_response(&ctx.http, response).await.is_ok() {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = cmd.create_followup(&ctx.http, followup).await {
        tracing::error!("Failed to send error reply for /{}: {}", cmd.data.name, e);
    }
}

/// Sends the initial response of an interaction.
pub(crate) async fn respond(
    ctx: &Context,
    cmd: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(truncate(&content.into(), MESSAGE_LIMIT))
        .ephemeral(ephemeral);
    cmd.create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Replaces the content of a deferred or sent response.
pub(crate) async fn edit(
    ctx: &Context,
    cmd: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let builder = EditInteractionResponse::new().content(truncate(&content.into(), MESSAGE_LIMIT));
    cmd.edit_response(&ctx.http, builder).await?;

    Ok(())
}

/// Sends a follow-up message.
pub(crate) async fn followup(
    ctx: &Context,
    cmd: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<Message, AppError> {
    let builder = CreateInteractionResponseFollowup::new()
        .content(truncate(&content.into(), MESSAGE_LIMIT))
        .ephemeral(ephemeral);

    Ok(cmd.create_followup(&ctx.http, builder).await?)
}

pub(crate) fn guild_id(cmd: &CommandInteraction) -> Result<GuildId, AppError> {
    cmd.guild_id
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server.".to_string()))
}

fn invoking_member(cmd: &CommandInteraction) -> Result<&Member, AppError> {
    cmd.member
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server.".to_string()))
}

pub(crate) fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find(|o| o.name == name).and_then(|o| match &o.value {
        ResolvedValue::String(value) => Some(*value),
        _ => None,
    })
}

pub(crate) fn role_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a Role> {
    options.iter().find(|o| o.name == name).and_then(|o| match &o.value {
        ResolvedValue::Role(role) => Some(*role),
        _ => None,
    })
}

pub(crate) fn attachment_option<'a>(
    options: &[ResolvedOption<'a>],
    name: &str,
) -> Option<&'a Attachment> {
    options.iter().find(|o| o.name == name).and_then(|o| match &o.value {
        ResolvedValue::Attachment(attachment) => Some(*attachment),
        _ => None,
    })
}

pub(crate) fn user_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    options.iter().find(|o| o.name == name).and_then(|o| match &o.value {
        ResolvedValue::User(user, _) => Some(*user),
        _ => None,
    })
}

/// Unwraps an option Discord marks as required.
pub(crate) fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'.", name)))
}

/// Fails unless the invoking member is a keeper of the server.
pub(crate) async fn require_keeper(
    state: &AppState,
    cmd: &CommandInteraction,
    guild_id: GuildId,
) -> Result<(), AppError> {
    let member = invoking_member(cmd)?;

    let guild = GuildService::new(&state.db).get(guild_id.get()).await?;
    let keeper_roles = KeeperRoleService::new(&state.db, guild_id.get()).get().await?;

    if is_keeper(member, guild.and_then(|g| g.keeper_role_id), &keeper_roles) {
        Ok(())
    } else {
        Err(PermissionError::NotKeeper.into())
    }
}

/// Fails unless the invoking member is a server administrator.
pub(crate) fn require_administrator(cmd: &CommandInteraction) -> Result<(), AppError> {
    if is_administrator(invoking_member(cmd)?) {
        Ok(())
    } else {
        Err(PermissionError::NotAdministrator.into())
    }
}

/// Fails unless the bot may hand out `role` in the server.
///
/// Fetches the server's roles and the bot's own member to compare the bot's
/// permissions and highest role against the target role.
pub(crate) async fn ensure_can_assign(
    ctx: &Context,
    guild_id: GuildId,
    role: &Role,
) -> Result<(), AppError> {
    let guild = guild_id.to_partial_guild(&ctx.http).await?;
    let bot_id = ctx.cache.current_user().id;
    let bot_member = guild_id.member(&ctx.http, bot_id).await?;

    let role_ids = bot_member
        .roles
        .iter()
        .copied()
        .chain(std::iter::once(guild_id.everyone_role()));
    let bot_roles = held_roles(&guild.roles, role_ids);
    let target = guild.roles.get(&role.id).unwrap_or(role);

    check_role_hierarchy(&bot_roles, target)?;

    Ok(())
}
