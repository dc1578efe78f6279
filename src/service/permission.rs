//! Permission checks for command invokers and for the bot itself.

use serenity::all::{Member, Permissions, Role, RoleId};
use std::collections::HashMap;

use crate::error::permission::PermissionError;

/// Whether a member may run keeper commands.
///
/// Administrators always may. Otherwise the member needs the keeper role chosen at
/// `/init` or one of the server's configured keeper roles.
///
/// # Arguments
/// - `member` - Invoking member as delivered with the interaction
/// - `guild_keeper_role` - Keeper role of the guild configuration, if any
/// - `keeper_roles` - Keeper roles of the keeper configuration
pub fn is_keeper(member: &Member, guild_keeper_role: Option<u64>, keeper_roles: &[u64]) -> bool {
    if is_administrator(member) {
        return true;
    }

    member.roles.iter().any(|role| {
        guild_keeper_role == Some(role.get()) || keeper_roles.contains(&role.get())
    })
}

/// Whether the member's interaction permissions include Administrator.
pub fn is_administrator(member: &Member) -> bool {
    member
        .permissions
        .is_some_and(|permissions| permissions.administrator())
}

/// Checks that the bot can assign `target`.
///
/// The bot needs Manage Roles (or Administrator) from any of its roles, and its
/// highest role must sit strictly above the target role.
///
/// # Arguments
/// - `bot_roles` - Every role the bot holds, including `@everyone`
/// - `target` - Role to assign
///
/// # Returns
/// - `Ok(())` - The bot may assign the role
/// - `Err(PermissionError::MissingManageRoles)` - No role grants Manage Roles
/// - `Err(PermissionError::RoleAboveBot)` - Target is at or above the bot's highest role
pub fn check_role_hierarchy(bot_roles: &[&Role], target: &Role) -> Result<(), PermissionError> {
    let permissions = bot_roles
        .iter()
        .fold(Permissions::empty(), |acc, role| acc | role.permissions);

    if !permissions.manage_roles() && !permissions.administrator() {
        return Err(PermissionError::MissingManageRoles);
    }

    let bot_position = bot_roles.iter().map(|role| role.position).max().unwrap_or(0);
    if bot_position <= target.position {
        return Err(PermissionError::RoleAboveBot {
            bot_position,
            role_position: target.position,
        });
    }

    Ok(())
}

/// Roles of `role_ids` found in `guild_roles`, skipping unknown IDs.
pub fn held_roles<'r>(
    guild_roles: &'r HashMap<RoleId, Role>,
    role_ids: impl IntoIterator<Item = RoleId>,
) -> Vec<&'r Role> {
    role_ids
        .into_iter()
        .filter_map(|role_id| guild_roles.get(&role_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_member, create_test_member_with_permissions, create_test_role};

    const GUILD_ID: u64 = 1;

    #[test]
    fn administrator_is_keeper() {
        let member = create_test_member_with_permissions(
            10,
            GUILD_ID,
            &[],
            Some(Permissions::ADMINISTRATOR.bits()),
        );

        assert!(is_keeper(&member, None, &[]));
        assert!(is_administrator(&member));
    }

    #[test]
    fn guild_keeper_role_grants_keeper() {
        let member = create_test_member(10, GUILD_ID, &[300]);

        assert!(is_keeper(&member, Some(300), &[]));
        assert!(!is_administrator(&member));
    }

    #[test]
    fn configured_keeper_role_grants_keeper() {
        let member = create_test_member(10, GUILD_ID, &[400, 401]);

        assert!(is_keeper(&member, Some(300), &[401]));
    }

    #[test]
    fn member_without_roles_is_not_keeper() {
        let member = create_test_member_with_permissions(
            10,
            GUILD_ID,
            &[500],
            Some(Permissions::SEND_MESSAGES.bits()),
        );

        assert!(!is_keeper(&member, Some(300), &[400]));
    }

    #[test]
    fn allows_role_below_bot() {
        let bot = create_test_role(1, "Bot", Permissions::MANAGE_ROLES.bits(), 10);
        let target = create_test_role(2, "Raider", 0, 5);

        assert_eq!(check_role_hierarchy(&[&bot], &target), Ok(()));
    }

    #[test]
    fn rejects_role_at_or_above_bot() {
        let bot = create_test_role(1, "Bot", Permissions::MANAGE_ROLES.bits(), 10);
        let equal = create_test_role(2, "Officer", 0, 10);
        let above = create_test_role(3, "Leader", 0, 12);

        assert_eq!(
            check_role_hierarchy(&[&bot], &equal),
            Err(PermissionError::RoleAboveBot {
                bot_position: 10,
                role_position: 10
            })
        );
        assert!(matches!(
            check_role_hierarchy(&[&bot], &above),
            Err(PermissionError::RoleAboveBot { .. })
        ));
    }

    #[test]
    fn rejects_bot_without_manage_roles() {
        let bot = create_test_role(1, "Bot", Permissions::SEND_MESSAGES.bits(), 10);
        let target = create_test_role(2, "Raider", 0, 5);

        assert_eq!(
            check_role_hierarchy(&[&bot], &target),
            Err(PermissionError::MissingManageRoles)
        );
    }

    #[test]
    fn combines_permissions_and_positions_of_all_bot_roles() {
        let everyone = create_test_role(1, "@everyone", Permissions::MANAGE_ROLES.bits(), 0);
        let bot = create_test_role(2, "Bot", 0, 8);
        let target = create_test_role(3, "Raider", 0, 5);

        assert_eq!(check_role_hierarchy(&[&everyone, &bot], &target), Ok(()));
    }

    #[test]
    fn collects_known_roles_only() {
        let mut guild_roles = HashMap::new();
        guild_roles.insert(RoleId::new(1), create_test_role(1, "A", 0, 1));
        guild_roles.insert(RoleId::new(2), create_test_role(2, "B", 0, 2));

        let held = held_roles(&guild_roles, [RoleId::new(2), RoleId::new(9)]);

        assert_eq!(held.len(), 1);
        assert_eq!(held[0].name, "B");
    }
}
