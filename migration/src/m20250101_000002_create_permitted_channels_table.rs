use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PermittedChannels::Table)
                    .if_not_exists()
                    .col(big_integer(PermittedChannels::GuildId))
                    .col(big_integer(PermittedChannels::ChannelId))
                    .primary_key(
                        Index::create()
                            .col(PermittedChannels::GuildId)
                            .col(PermittedChannels::ChannelId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PermittedChannels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PermittedChannels {
    Table,
    GuildId,
    ChannelId,
}
