//! Resolution of player names to Discord accounts.

use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::DbErr;
use std::collections::{HashMap, HashSet};

use crate::{
    data::player::PlayerRepository,
    model::{
        battle::{IdentityResolution, ResolvedIdentity},
        player::PlayerMapping,
    },
};

/// Store of player name mappings queried in one batch.
#[async_trait]
pub trait PlayerLookup: Send + Sync {
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<PlayerMapping>, DbErr>;
}

#[async_trait]
impl PlayerLookup for PlayerRepository<'_> {
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<PlayerMapping>, DbErr> {
        PlayerRepository::find_by_names(self, names).await
    }
}

/// Splits `names` into mapped and unmapped players.
///
/// Every distinct name ends up in exactly one of `resolved` and `unresolved`, both
/// in first-encounter order; repeated names are considered once. When the store
/// cannot be queried the error is logged, every name is unresolved and
/// `lookup_failed` is set.
pub async fn resolve_identities<L>(lookup: &L, names: &[String]) -> IdentityResolution
where
    L: PlayerLookup + ?Sized,
{
    let mut seen = HashSet::new();
    let mut distinct = Vec::with_capacity(names.len());
    for name in names {
        if seen.insert(name.as_str()) {
            distinct.push(name.clone());
        }
    }
    let names = distinct.as_slice();

    if names.is_empty() {
        return IdentityResolution::default();
    }

    let mappings = match lookup.find_by_names(names).await {
        Ok(mappings) => mappings,
        Err(e) => {
            tracing::error!("Failed to look up Discord IDs for {} players: {}", names.len(), e);
            return IdentityResolution {
                resolved: Vec::new(),
                unresolved: names.to_vec(),
                lookup_failed: true,
            };
        }
    };

    let discord_ids: HashMap<&str, u64> = mappings
        .iter()
        .map(|mapping| (mapping.player_name.as_str(), mapping.discord_id))
        .collect();

    let mut resolution = IdentityResolution::default();
    for name in names {
        match discord_ids.get(name.as_str()) {
            Some(&discord_id) => resolution.resolved.push(ResolvedIdentity {
                name: name.clone(),
                discord_id,
            }),
            None => resolution.unresolved.push(name.clone()),
        }
    }

    resolution
}
