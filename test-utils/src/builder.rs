use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityName, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Guild, Player};
///
/// let test = TestBuilder::new()
///     .with_table(Guild)
///     .with_table(Player)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Column-level unique constraints declared on the entity are
    /// carried over, and composite unique indexes created by the migrations are added,
    /// so duplicate inserts fail the same way they do in production.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut table = schema.create_table_from_entity(entity);
        for mut index in composite_unique_indexes(entity.table_name()) {
            table.index(&mut index);
        }
        self.tables.push(table);
        self
    }

    /// Adds every table the bot uses.
    ///
    /// Convenience for service-level tests that touch guild configuration,
    /// player mappings and keeper roles at once.
    pub fn with_all_tables(self) -> Self {
        self.with_table(Guild)
            .with_table(Player)
            .with_table(KeeperRole)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

/// Multi-column unique indexes the migrations create for a table.
fn composite_unique_indexes(table_name: &str) -> Vec<IndexCreateStatement> {
    match table_name {
        "keeper_role" => vec![Index::create()
            .unique()
            .name("idx_keeper_role_guild_role_unique")
            .col(entity::keeper_role::Column::GuildId)
            .col(entity::keeper_role::Column::RoleId)
            .to_owned()],
        _ => Vec::new(),
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
