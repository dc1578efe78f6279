//! `/battle`: gives a role to every guild member who fought in a set of battles.

use async_trait::async_trait;
use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption, RoleId,
};

use crate::{
    bot::command::{
        ensure_can_assign, followup, guild_id, require_keeper, required, respond, role_option,
        string_option,
    },
    data::player::PlayerRepository,
    error::AppError,
    model::battle::{ReconcileProgress, ReconcileRequest, ReconciliationSummary},
    service::battle::{
        assign::DiscordRoleGateway, roster::BattleBoardClient, BattleService, ReconcileObserver,
    },
    state::AppState,
    util::message::join_names,
};

pub fn definition() -> CreateCommand {
    CreateCommand::new("battle")
        .description("Add a role to guild members based on the battle board")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "boardurl", "The battle board to use")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "guild", "The guild to use")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Role,
                "role",
                "The role to add to the guild members",
            )
            .required(true),
        )
}

pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = guild_id(cmd)?;
    require_keeper(state, cmd, guild_id).await?;

    let options = cmd.data.options();
    let board_url = required(string_option(&options, "boardurl"), "boardurl")?;
    let guild_name = required(string_option(&options, "guild"), "guild")?;
    let role = required(role_option(&options, "role"), "role")?;

    ensure_can_assign(ctx, guild_id, role).await?;

    tracing::info!(
        "Battle reconciliation by {}: board {}, guild {}, role {}",
        cmd.user.name,
        board_url,
        guild_name,
        role.name
    );
    respond(
        ctx,
        cmd,
        format!(
            "Battle command initiated by <@{}>\nBoard URL: {}\nGuild: {}\nRole: <@&{}>",
            cmd.user.id, board_url, guild_name, role.id
        ),
        false,
    )
    .await?;

    let service = BattleService::new(
        BattleBoardClient::new(state.http_client.clone(), state.battle_board.clone()),
        PlayerRepository::new(&state.db),
        DiscordRoleGateway::new(ctx.http.clone(), guild_id),
    );
    let request = ReconcileRequest {
        board_url: board_url.to_string(),
        guild_name: guild_name.to_string(),
        role_id: role.id,
    };
    let observer = FollowupObserver { ctx, cmd };

    let summary = service.reconcile(&request, &observer).await?;

    followup(ctx, cmd, summary_message(&summary, guild_name, role.id), false).await?;

    Ok(())
}

/// Posts reconciliation progress as follow-up messages.
struct FollowupObserver<'a> {
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
}

#[async_trait]
impl ReconcileObserver for FollowupObserver<'_> {
    async fn notify(&self, progress: ReconcileProgress) {
        if let Err(e) = followup(self.ctx, self.cmd, progress_message(&progress), false).await {
            tracing::error!("Failed to post battle progress: {}", e);
        }
    }
}

fn progress_message(progress: &ReconcileProgress) -> String {
    match progress {
        ReconcileProgress::RosterFound { guild_name, names } => format!(
            "Found {} {} players: {}",
            names.len(),
            guild_name,
            join_names(names)
        ),
        ReconcileProgress::MissingIdentities {
            names,
            lookup_failed: true,
        } => format!(
            "Could not look up Discord IDs, skipping every player: {}",
            join_names(names)
        ),
        ReconcileProgress::MissingIdentities { names, .. } => {
            format!("Players missing Discord IDs: {}", join_names(names))
        }
    }
}

fn summary_message(summary: &ReconciliationSummary, guild_name: &str, role_id: RoleId) -> String {
    format!(
        "Finished adding {} {} players to the role <@&{}>\nSkipped {} players: {}",
        summary.applied(),
        guild_name,
        role_id,
        summary.skipped(),
        join_names(&summary.skipped_names)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn describes_roster() {
        let progress = ReconcileProgress::RosterFound {
            guild_name: "G".to_string(),
            names: names(&["A", "B"]),
        };

        assert_eq!(progress_message(&progress), "Found 2 G players: A, B");
    }

    #[test]
    fn distinguishes_lookup_failure_from_unmapped_players() {
        let missing = ReconcileProgress::MissingIdentities {
            names: names(&["B"]),
            lookup_failed: false,
        };
        let failed = ReconcileProgress::MissingIdentities {
            names: names(&["A", "B"]),
            lookup_failed: true,
        };

        assert_eq!(progress_message(&missing), "Players missing Discord IDs: B");
        assert!(progress_message(&failed).starts_with("Could not look up Discord IDs"));
    }

    #[test]
    fn summarizes_applied_and_skipped_players() {
        let summary = ReconciliationSummary {
            applied_names: names(&["A"]),
            skipped_names: names(&["B"]),
        };

        assert_eq!(
            summary_message(&summary, "G", RoleId::new(50)),
            "Finished adding 1 G players to the role <@&50>\nSkipped 1 players: B"
        );
    }

    #[test]
    fn summarizes_empty_run() {
        assert_eq!(
            summary_message(&ReconciliationSummary::default(), "G", RoleId::new(50)),
            "Finished adding 0 G players to the role <@&50>\nSkipped 0 players: none"
        );
    }
}
