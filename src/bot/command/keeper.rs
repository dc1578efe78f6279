//! `/keeper`: manages the roles allowed to run keeper commands.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions, ResolvedValue,
};

use crate::{
    bot::command::{guild_id, require_administrator, required, respond, role_option},
    error::AppError,
    service::{guild::GuildService, keeper::KeeperRoleService},
    state::AppState,
};

pub fn definition() -> CreateCommand {
    let role = |description: &str| {
        CreateCommandOption::new(CommandOptionType::Role, "role", description).required(true)
    };

    CreateCommand::new("keeper")
        .description("Manage the roles allowed to run keeper commands")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Add a keeper role")
                .add_sub_option(role("The role to add")),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "remove", "Remove a keeper role")
                .add_sub_option(role("The role to remove")),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List the keeper roles",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "reset",
            "Remove every configured keeper role",
        ))
}

pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;
    require_administrator(cmd)?;

    let options = cmd.data.options();
    let (subcommand, sub_options) = match options.first() {
        Some(option) => match &option.value {
            ResolvedValue::SubCommand(sub_options) => (option.name, sub_options.as_slice()),
            _ => return Err(AppError::BadRequest("Unknown keeper subcommand.".to_string())),
        },
        None => return Err(AppError::BadRequest("Unknown keeper subcommand.".to_string())),
    };

    let service = KeeperRoleService::new(&state.db, guild_id.get());

    let content = match subcommand {
        "add" => {
            let role = required(role_option(sub_options, "role"), "role")?;
            if service.append(role.id.get()).await? {
                format!("<@&{}> is now a keeper role.", role.id)
            } else {
                format!("<@&{}> already is a keeper role.", role.id)
            }
        }
        "remove" => {
            let role = required(role_option(sub_options, "role"), "role")?;
            if service.remove(role.id.get()).await? {
                format!("<@&{}> is no longer a keeper role.", role.id)
            } else {
                format!("<@&{}> is not a keeper role.", role.id)
            }
        }
        "list" => {
            let guild = GuildService::new(&state.db).get(guild_id.get()).await?;
            let roles = service.get().await?;
            keeper_list(guild.and_then(|g| g.keeper_role_id), &roles)
        }
        "reset" => {
            service.set(&[]).await?;
            "Removed every configured keeper role.".to_string()
        }
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown keeper subcommand '{}'.",
                other
            )))
        }
    };

    respond(ctx, cmd, content, true).await
}

fn keeper_list(guild_keeper_role: Option<u64>, roles: &[u64]) -> String {
    let mut lines = Vec::new();

    if let Some(role_id) = guild_keeper_role {
        lines.push(format!("Keeper role from /init: <@&{}>", role_id));
    }

    if roles.is_empty() {
        lines.push("No additional keeper roles configured.".to_string());
    } else {
        let mentions: Vec<String> = roles.iter().map(|id| format!("<@&{}>", id)).collect();
        lines.push(format!("Keeper roles: {}", mentions.join(", ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_init_role_and_configured_roles() {
        assert_eq!(
            keeper_list(Some(1), &[2, 3]),
            "Keeper role from /init: <@&1>\nKeeper roles: <@&2>, <@&3>"
        );
    }

    #[test]
    fn reports_missing_configuration() {
        assert_eq!(keeper_list(None, &[]), "No additional keeper roles configured.");
    }
}
