use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{bot::command::respond, error::AppError};

pub fn definition() -> CreateCommand {
    CreateCommand::new("ping").description("Replies with Pong!")
}

pub async fn run(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    respond(ctx, cmd, "Pong!", false).await
}
