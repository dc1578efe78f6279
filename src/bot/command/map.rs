use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::command::{edit, guild_id, require_keeper, required, string_option, user_option},
    error::AppError,
    model::player::MapOutcome,
    service::player::PlayerService,
    state::AppState,
};

pub fn definition() -> CreateCommand {
    CreateCommand::new("map")
        .description("Map a player to a user")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "player", "The player's ign to map")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The user to map the player to")
                .required(true),
        )
}

pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;
    require_keeper(state, cmd, guild_id).await?;

    let options = cmd.data.options();
    let player = required(string_option(&options, "player"), "player")?;
    let user = required(user_option(&options, "user"), "user")?;

    cmd.defer_ephemeral(&ctx.http).await?;

    if guild_id.member(&ctx.http, user.id).await.is_err() {
        return Err(AppError::NotFound(
            "Could not find that user in this server.".to_string(),
        ));
    }

    let content = match PlayerService::new(&state.db).map(player, user.id.get()).await? {
        MapOutcome::Mapped(_) => format!("Player {} mapped to <@{}>", player, user.id),
        MapOutcome::AlreadyMapped => format!("Player {} is already mapped.", player),
    };

    edit(ctx, cmd, content).await
}
