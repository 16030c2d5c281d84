use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registros::Table)
                    .if_not_exists()
                    .col(big_integer(Registros::UserId).primary_key())
                    .col(text(Registros::DiscordTag))
                    .col(text(Registros::Nickname))
                    .col(text(Registros::ExternalId))
                    .col(timestamp(Registros::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Registros::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // Reverse lookups by external id; not unique, several users may share one
        manager
            .create_index(
                Index::create()
                    .name("idx_registros_external_id")
                    .table(Registros::Table)
                    .col(Registros::ExternalId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_registros_external_id")
                    .table(Registros::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Registros::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Registros {
    Table,
    UserId,
    DiscordTag,
    Nickname,
    ExternalId,
    CreatedAt,
    UpdatedAt,
}
