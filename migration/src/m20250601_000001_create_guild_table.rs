use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(pk_auto(Guild::Id))
                    .col(string_uniq(Guild::GuildId))
                    .col(string(Guild::AlbionGuildId))
                    .col(string(Guild::AlbionGuildName))
                    .col(string_null(Guild::MemberRoleId))
                    .col(string_null(Guild::KeeperRoleId))
                    .col(timestamp_with_time_zone(Guild::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    Id,
    GuildId,
    AlbionGuildId,
    AlbionGuildName,
    MemberRoleId,
    KeeperRoleId,
    CreatedAt,
}
