//! Concurrent role assignment.

use async_trait::async_trait;
use dioxus_logger::tracing;
use futures::future::join_all;
use serenity::{
    all::{GuildId, Member, RoleId, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::battle::AssignmentError,
    model::battle::{AssignmentResult, ResolvedIdentity},
    util::parse,
};

/// Discord operations needed to hand out a role.
#[async_trait]
pub trait RoleGateway: Send + Sync {
    async fn fetch_member(&self, user_id: UserId) -> Result<Member, serenity::Error>;

    async fn add_role(&self, member: &Member, role_id: RoleId) -> Result<(), serenity::Error>;
}

/// Role gateway for one Discord guild over the bot's HTTP client.
pub struct DiscordRoleGateway {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordRoleGateway {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl RoleGateway for DiscordRoleGateway {
    async fn fetch_member(&self, user_id: UserId) -> Result<Member, serenity::Error> {
        self.guild_id.member(&*self.http, user_id).await
    }

    async fn add_role(&self, member: &Member, role_id: RoleId) -> Result<(), serenity::Error> {
        member.add_role(&*self.http, role_id).await
    }
}

/// Gives `role_id` to every identity.
///
/// All attempts run concurrently and are awaited until each has settled; one failed
/// attempt never cancels the others. Outcomes are merged once afterwards, so every
/// identity lands in exactly one of `applied` and `failed`, in input order.
pub async fn assign_role<G>(
    gateway: &G,
    identities: &[ResolvedIdentity],
    role_id: RoleId,
) -> AssignmentResult
where
    G: RoleGateway + ?Sized,
{
    let attempts = identities.iter().map(|identity| async move {
        let outcome = assign_one(gateway, identity, role_id).await;
        (identity.name.clone(), outcome)
    });

    join_all(attempts)
        .await
        .into_iter()
        .fold(AssignmentResult::default(), |mut result, (name, outcome)| {
            match outcome {
                Ok(()) => {
                    tracing::debug!("Added role {} to player {}", role_id, name);
                    result.applied.push(name);
                }
                Err(e) => {
                    tracing::error!("Failed to add role {} to player {}: {}", role_id, name, e);
                    result.failed.push((name, e));
                }
            }
            result
        })
}

async fn assign_one<G>(
    gateway: &G,
    identity: &ResolvedIdentity,
    role_id: RoleId,
) -> Result<(), AssignmentError>
where
    G: RoleGateway + ?Sized,
{
    let user_id = parse::user_id(identity.discord_id).map_err(|e| {
        tracing::warn!("Skipping player {}: {}", identity.name, e);
        AssignmentError::InvalidIdentity
    })?;

    let member = gateway
        .fetch_member(user_id)
        .await
        .map_err(|e| AssignmentError::MemberUnavailable(e.to_string()))?;

    gateway
        .add_role(&member, role_id)
        .await
        .map_err(|e| AssignmentError::RoleRejected(e.to_string()))
}
