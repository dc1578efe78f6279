//! Keeper role factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a keeper role row for `guild_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
/// - `role_id` - Discord role ID as string
///
/// # Returns
/// - `Ok(entity::keeper_role::Model)` - Created keeper role row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_keeper_role(
    db: &DatabaseConnection,
    guild_id: &str,
    role_id: &str,
) -> Result<entity::keeper_role::Model, DbErr> {
    entity::keeper_role::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        role_id: ActiveValue::Set(role_id.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
