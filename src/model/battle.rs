//! Types flowing through battle roster reconciliation.
//!
//! All of these live for a single command invocation and are never persisted.

use serenity::all::RoleId;

use crate::error::battle::AssignmentError;

/// Battle board service a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleBoard {
    /// albionbattles.com, roster served as a flat player list.
    AlbionBattles,
    /// albionbb.com, roster derived from kill events.
    AlbionBb,
}

/// Game server region a battle board link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Americas,
    Europe,
}

/// Parsed battle board link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReference {
    pub board: BattleBoard,
    pub region: Region,
    /// Battle IDs in the order they appeared in the link.
    pub ids: Vec<String>,
}

/// One participant of a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleParticipant {
    pub name: String,
    /// Empty when the participant fought without a guild.
    pub guild_name: String,
}

impl BattleParticipant {
    pub fn new(name: impl Into<String>, guild_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guild_name: guild_name.into(),
        }
    }
}

/// Player name with the Discord account it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub name: String,
    pub discord_id: u64,
}

/// Partition of candidate names into mapped and unmapped players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityResolution {
    pub resolved: Vec<ResolvedIdentity>,
    pub unresolved: Vec<String>,
    /// Set when the mapping store could not be queried; every candidate is then unresolved.
    pub lookup_failed: bool,
}

/// Partition of resolved identities by role assignment outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    pub applied: Vec<String>,
    pub failed: Vec<(String, AssignmentError)>,
}

impl AssignmentResult {
    /// Names whose assignment failed, in result order.
    pub fn failed_names(&self) -> Vec<String> {
        self.failed.iter().map(|(name, _)| name.clone()).collect()
    }
}

/// Final outcome of a reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationSummary {
    /// Names that received the role.
    pub applied_names: Vec<String>,
    /// Names that did not receive the role: failed assignments followed by unresolved names.
    pub skipped_names: Vec<String>,
}

impl ReconciliationSummary {
    pub fn applied(&self) -> usize {
        self.applied_names.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped_names.len()
    }
}

/// Input of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileRequest {
    pub board_url: String,
    /// Albion guild whose members receive the role, matched exactly.
    pub guild_name: String,
    pub role_id: RoleId,
}

/// Progress reported while a reconciliation is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileProgress {
    /// The roster was fetched and filtered to the target guild.
    RosterFound {
        guild_name: String,
        names: Vec<String>,
    },
    /// Some guild members have no Discord mapping.
    MissingIdentities {
        names: Vec<String>,
        lookup_failed: bool,
    },
}
