use serenity::all::{Context, Interaction};

use crate::{bot::command, state::AppState};

/// Routes slash command interactions to their command.
///
/// Button presses are consumed by the collectors of the commands that created them and
/// need no handling here.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    if let Interaction::Command(cmd) = interaction {
        command::dispatch(state, &ctx, &cmd).await;
    }
}
