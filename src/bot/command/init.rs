//! `/init`: links a Discord server to an Albion Online guild.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::{
    bot::command::{edit, guild_id, require_administrator, required, role_option, string_option},
    error::AppError,
    service::{gameinfo::GameInfoClient, guild::GuildService},
    state::AppState,
};

pub fn definition() -> CreateCommand {
    CreateCommand::new("init")
        .description("Initialize the guild")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "guild", "The guild to initialize")
                .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::Role,
            "member_role",
            "The role given to registered players",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Role,
            "keeper_role",
            "The role allowed to run keeper commands",
        ))
}

pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;
    require_administrator(cmd)?;

    let options = cmd.data.options();
    let guild_name = required(string_option(&options, "guild"), "guild")?;
    let member_role = role_option(&options, "member_role").map(|role| role.id.get());
    let keeper_role = role_option(&options, "keeper_role").map(|role| role.id.get());

    cmd.defer_ephemeral(&ctx.http).await?;

    let gameinfo = GameInfoClient::new(state.http_client.clone(), state.gameinfo_url.clone());
    let guild = GuildService::new(&state.db)
        .initialize(&gameinfo, guild_id.get(), guild_name, member_role, keeper_role)
        .await?;

    edit(
        ctx,
        cmd,
        format!("Guild initialized. Linked to {}.", guild.albion_guild_name),
    )
    .await
}
