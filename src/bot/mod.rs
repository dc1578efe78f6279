//! Discord bot: gateway client, event handling and slash commands.
//!
//! The bot registers its slash commands globally once connected and answers every
//! command interaction in its own task, as serenity dispatches events concurrently.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and role data used by permission checks
//! - `GUILD_MEMBERS` - Member lookups when assigning roles (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
