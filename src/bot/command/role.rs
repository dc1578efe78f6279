//! `/addrole` and `/removerole`: change one member's role.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption, Role, User,
};

use crate::{
    bot::command::{
        edit, ensure_can_assign, guild_id, require_keeper, required, role_option, user_option,
    },
    error::AppError,
    state::AppState,
};

pub fn add_definition() -> CreateCommand {
    CreateCommand::new("addrole")
        .description("Add a role to a user")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Role, "role", "The role to add to the user")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The user to add the role to")
                .required(true),
        )
}

pub fn remove_definition() -> CreateCommand {
    CreateCommand::new("removerole")
        .description("Remove a role from a user")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Role,
                "role",
                "The role to remove from the user",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "The user to remove the role from",
            )
            .required(true),
        )
}

pub async fn run_add(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    run_change(state, ctx, cmd, RoleChange::Add).await
}

pub async fn run_remove(
    state: &AppState,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    run_change(state, ctx, cmd, RoleChange::Remove).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleChange {
    Add,
    Remove,
}

async fn run_change(
    state: &AppState,
    ctx: &Context,
    cmd: &CommandInteraction,
    change: RoleChange,
) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;
    require_keeper(state, cmd, guild_id).await?;

    let options = cmd.data.options();
    let role = required(role_option(&options, "role"), "role")?;
    let user = required(user_option(&options, "user"), "user")?;

    cmd.defer(&ctx.http).await?;

    let member = guild_id.member(&ctx.http, user.id).await.map_err(|_| {
        tracing::warn!("User {} not found in guild {}", user.id, guild_id);
        AppError::NotFound("Could not find that user in this server.".to_string())
    })?;

    ensure_can_assign(ctx, guild_id, role).await?;

    let result = match change {
        RoleChange::Add => member.add_role(&ctx.http, role.id).await,
        RoleChange::Remove => member.remove_role(&ctx.http, role.id).await,
    };

    if let Err(e) = result {
        tracing::error!("Failed to change role {} of user {}: {}", role.id, user.id, e);
        return Err(AppError::BadRequest(failure_message(change, &e.to_string())));
    }

    tracing::info!("Changed role {} of user {} ({:?})", role.name, user.name, change);
    edit(ctx, cmd, success_message(change, role, user)).await
}

fn success_message(change: RoleChange, role: &Role, user: &User) -> String {
    match change {
        RoleChange::Add => format!("Successfully added the role <@&{}> to <@{}>.", role.id, user.id),
        RoleChange::Remove => format!(
            "Successfully removed the role <@&{}> from <@{}>.",
            role.id, user.id
        ),
    }
}

fn failure_message(change: RoleChange, reason: &str) -> String {
    match change {
        RoleChange::Add => format!("Failed to add role: {}", reason),
        RoleChange::Remove => format!("Failed to remove role: {}", reason),
    }
}
