use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_server_listing_table::ServerListing;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BumpEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(BumpEvent::Id))
                    .col(integer(BumpEvent::ServerId))
                    .col(string(BumpEvent::ActorId))
                    .col(timestamp(BumpEvent::BumpedAt))
                    .col(string(BumpEvent::Source))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bump_event_server_id")
                            .from(BumpEvent::Table, BumpEvent::ServerId)
                            .to(ServerListing::Table, ServerListing::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bump_event_server_id")
                    .table(BumpEvent::Table)
                    .col(BumpEvent::ServerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bump_event_server_id")
                    .table(BumpEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BumpEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BumpEvent {
    Table,
    Id,
    ServerId,
    ActorId,
    BumpedAt,
    Source,
}
