//! Ready event handler for bot initialization.
//!
//! Fired once the bot has authenticated with the gateway. Registers the global slash
//! commands so they are available in every server the bot is in.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration replaces the whole global command set, so commands removed from the
/// bot disappear from Discord as well. A failed registration is logged; previously
/// registered commands keep working.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
