//! Keeper role configuration per Discord server.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{data::keeper_role::KeeperRoleRepository, error::AppError};

/// Keeper roles of one Discord server.
///
/// Members holding any of these roles may run keeper commands, in addition to
/// administrators and holders of the role chosen at `/init`.
pub struct KeeperRoleService<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
}

impl<'a> KeeperRoleService<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: u64) -> Self {
        Self { db, guild_id }
    }

    /// Gets the configured keeper role IDs.
    pub async fn get(&self) -> Result<Vec<u64>, AppError> {
        let repo = KeeperRoleRepository::new(self.db);

        Ok(repo.get_by_guild_id(self.guild_id).await?)
    }

    /// Replaces the configured keeper roles.
    ///
    /// Duplicate IDs in `role_ids` are stored once.
    pub async fn set(&self, role_ids: &[u64]) -> Result<(), AppError> {
        let repo = KeeperRoleRepository::new(self.db);

        repo.delete_by_guild_id(self.guild_id).await?;

        let mut stored = Vec::with_capacity(role_ids.len());
        for &role_id in role_ids {
            if stored.contains(&role_id) {
                continue;
            }
            repo.create(self.guild_id, role_id).await?;
            stored.push(role_id);
        }

        tracing::info!("Set {} keeper roles for guild {}", stored.len(), self.guild_id);

        Ok(())
    }

    /// Adds a keeper role.
    ///
    /// The unique `(guild_id, role_id)` index decides whether the role is already
    /// configured.
    ///
    /// # Returns
    /// - `Ok(true)` - The role was added
    /// - `Ok(false)` - The role already was a keeper role
    pub async fn append(&self, role_id: u64) -> Result<bool, AppError> {
        let repo = KeeperRoleRepository::new(self.db);

        match repo.create(self.guild_id, role_id).await {
            Ok(()) => {
                tracing::info!("Added keeper role {} for guild {}", role_id, self.guild_id);
                Ok(true)
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a keeper role.
    ///
    /// # Returns
    /// - `Ok(true)` - The role was removed
    /// - `Ok(false)` - The role was not a keeper role
    pub async fn remove(&self, role_id: u64) -> Result<bool, AppError> {
        let repo = KeeperRoleRepository::new(self.db);

        let removed = repo.delete(self.guild_id, role_id).await?;
        if removed {
            tracing::info!("Removed keeper role {} for guild {}", role_id, self.guild_id);
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn append_reports_whether_role_was_new() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = KeeperRoleService::new(db, 1);

        assert!(service.append(10).await?);
        assert!(!service.append(10).await?);
        assert_eq!(service.get().await?, vec![10]);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_appends_add_role_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = KeeperRoleService::new(db, 1);
        let (first, second) = tokio::join!(service.append(10), service.append(10));

        assert!(first? ^ second?);
        assert_eq!(service.get().await?, vec![10]);

        Ok(())
    }

    #[tokio::test]
    async fn remove_reports_whether_role_was_present() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_keeper_role(db, "1", "10").await?;

        let service = KeeperRoleService::new(db, 1);

        assert!(service.remove(10).await?);
        assert!(!service.remove(10).await?);
        assert!(service.get().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn set_replaces_roles_of_this_guild_only() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_keeper_role(db, "1", "10").await?;
        factory::create_keeper_role(db, "2", "99").await?;

        let service = KeeperRoleService::new(db, 1);
        service.set(&[20, 30, 20]).await?;

        assert_eq!(service.get().await?, vec![20, 30]);
        assert_eq!(KeeperRoleService::new(db, 2).get().await?, vec![99]);

        service.set(&[]).await?;
        assert!(service.get().await?.is_empty());

        Ok(())
    }
}
