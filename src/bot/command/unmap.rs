use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::command::{edit, guild_id, require_keeper, required, string_option},
    error::AppError,
    service::player::PlayerService,
    state::AppState,
};

pub fn definition() -> CreateCommand {
    CreateCommand::new("unmap")
        .description("Unmap a player from a user")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "player", "The player's ign to unmap")
                .required(true),
        )
}

pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;
    require_keeper(state, cmd, guild_id).await?;

    let options = cmd.data.options();
    let player = required(string_option(&options, "player"), "player")?;

    cmd.defer_ephemeral(&ctx.http).await?;

    if !PlayerService::new(&state.db).unmap(player).await? {
        return Err(AppError::NotFound(format!("Player {} is not mapped.", player)));
    }

    edit(ctx, cmd, format!("Player {} unmapped.", player)).await
}
