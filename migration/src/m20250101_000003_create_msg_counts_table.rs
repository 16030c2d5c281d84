use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MsgCounts::Table)
                    .if_not_exists()
                    .col(big_integer(MsgCounts::GuildId))
                    .col(big_integer(MsgCounts::UserId))
                    .col(integer(MsgCounts::Counted).default(0))
                    .col(timestamp(MsgCounts::UpdatedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .col(MsgCounts::GuildId)
                            .col(MsgCounts::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MsgCounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MsgCounts {
    Table,
    GuildId,
    UserId,
    Counted,
    UpdatedAt,
}
