use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KeeperRole::Table)
                    .if_not_exists()
                    .col(pk_auto(KeeperRole::Id))
                    .col(string(KeeperRole::GuildId))
                    .col(string(KeeperRole::RoleId))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_keeper_role_guild_role_unique")
                            .col(KeeperRole::GuildId)
                            .col(KeeperRole::RoleId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KeeperRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KeeperRole {
    Table,
    Id,
    GuildId,
    RoleId,
}
