//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test guild member holding the given roles.
///
/// # Arguments
/// - `user_id` - Discord user ID of the member
/// - `guild_id` - Discord guild ID the member belongs to
/// - `role_ids` - Roles held by the member
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(user_id: u64, guild_id: u64, role_ids: &[u64]) -> Member {
    create_test_member_with_permissions(user_id, guild_id, role_ids, None)
}

/// Creates a test guild member carrying resolved interaction permissions.
///
/// Discord only includes `permissions` on members delivered with an interaction;
/// pass `Some(bits)` to simulate that payload.
pub fn create_test_member_with_permissions(
    user_id: u64,
    guild_id: u64,
    role_ids: &[u64],
    permissions: Option<u64>,
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": {
            "id": user_id.to_string(),
            "username": format!("user{}", user_id),
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.map(|p| p.to_string()),
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
