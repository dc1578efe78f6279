//! Battle roster reconciliation.
//!
//! Gives a Discord role to every member of an Albion guild who fought in a set of
//! battles. The steps run in order:
//!
//! 1. `reference` parses the battle board link into battle IDs
//! 2. `roster` fetches the participants of those battles
//! 3. `filter` keeps the members of the requested guild
//! 4. `resolver` maps player names to Discord accounts
//! 5. `assign` hands out the role concurrently
//! 6. `report` folds the outcomes into a summary

pub mod assign;
pub mod filter;
pub mod reference;
pub mod report;
pub mod resolver;
pub mod roster;

use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::{
    error::battle::BattleBoardError,
    model::battle::{ReconcileProgress, ReconcileRequest, ReconciliationSummary},
    service::battle::{
        assign::{assign_role, RoleGateway},
        filter::filter_guild_members,
        reference::parse_board_url,
        report::summarize,
        resolver::{resolve_identities, PlayerLookup},
        roster::{fetch_roster_or_empty, RosterSource},
    },
};

/// Receives progress while a reconciliation runs.
#[async_trait]
pub trait ReconcileObserver: Send + Sync {
    async fn notify(&self, progress: ReconcileProgress);
}

/// Runs battle roster reconciliation over its three collaborators.
pub struct BattleService<S, L, G> {
    roster_source: S,
    player_lookup: L,
    role_gateway: G,
}

impl<S, L, G> BattleService<S, L, G>
where
    S: RosterSource,
    L: PlayerLookup,
    G: RoleGateway,
{
    pub fn new(roster_source: S, player_lookup: L, role_gateway: G) -> Self {
        Self {
            roster_source,
            player_lookup,
            role_gateway,
        }
    }

    /// Gives the requested role to every mapped guild member found on the battle board.
    ///
    /// Only an unusable link aborts the run. An unreachable board yields an empty
    /// roster, a failed mapping lookup leaves every member unresolved and a failed
    /// assignment only skips that member.
    ///
    /// # Arguments
    /// - `request` - Battle board link, Albion guild name and role to hand out
    /// - `observer` - Receives `RosterFound` and, when some members are unmapped,
    ///   `MissingIdentities` before the summary is returned
    ///
    /// # Returns
    /// - `Ok(ReconciliationSummary)` - Applied and skipped player names
    /// - `Err(BattleBoardError)` - The link is not a supported battle board link
    pub async fn reconcile(
        &self,
        request: &ReconcileRequest,
        observer: &dyn ReconcileObserver,
    ) -> Result<ReconciliationSummary, BattleBoardError> {
        let reference = parse_board_url(&request.board_url)?;
        tracing::info!(
            "Found {} battle IDs: {}",
            reference.ids.len(),
            reference.ids.join(", ")
        );

        let roster = fetch_roster_or_empty(&self.roster_source, &reference).await;
        let names = filter_guild_members(&roster, &request.guild_name);
        tracing::info!(
            "Found {} players from guild {} among {} participants",
            names.len(),
            request.guild_name,
            roster.len()
        );
        observer
            .notify(ReconcileProgress::RosterFound {
                guild_name: request.guild_name.clone(),
                names: names.clone(),
            })
            .await;

        let resolution = resolve_identities(&self.player_lookup, &names).await;
        if !resolution.unresolved.is_empty() {
            tracing::warn!(
                "Players missing Discord IDs: {}",
                resolution.unresolved.join(", ")
            );
            observer
                .notify(ReconcileProgress::MissingIdentities {
                    names: resolution.unresolved.clone(),
                    lookup_failed: resolution.lookup_failed,
                })
                .await;
        }

        let assignment = assign_role(&self.role_gateway, &resolution.resolved, request.role_id).await;
        let summary = summarize(&assignment, &resolution.unresolved);
        tracing::info!(
            "Role assignment completed: {} applied, {} skipped",
            summary.applied(),
            summary.skipped()
        );

        Ok(summary)
    }
}
