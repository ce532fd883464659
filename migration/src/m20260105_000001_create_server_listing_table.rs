use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerListing::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerListing::Id))
                    .col(string(ServerListing::Name))
                    .col(text(ServerListing::Description))
                    .col(string(ServerListing::InviteLink))
                    .col(integer(ServerListing::MemberCount).default(0))
                    .col(string_null(ServerListing::LogoUrl))
                    .col(boolean(ServerListing::Verified).default(false))
                    .col(string(ServerListing::Tags).default(""))
                    .col(string_null(ServerListing::OwnerId))
                    .col(string_null(ServerListing::GuildId))
                    .col(timestamp_null(ServerListing::LastBumpAt))
                    .col(integer(ServerListing::BumpCount).default(0))
                    .col(boolean(ServerListing::AutoUpdate).default(false))
                    .col(
                        timestamp(ServerListing::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Bot commands resolve the listing from the guild they were used in
        manager
            .create_index(
                Index::create()
                    .name("idx_server_listing_guild_id")
                    .table(ServerListing::Table)
                    .col(ServerListing::GuildId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_listing_bump_count")
                    .table(ServerListing::Table)
                    .col(ServerListing::BumpCount)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_server_listing_bump_count")
                    .table(ServerListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_server_listing_guild_id")
                    .table(ServerListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ServerListing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerListing {
    Table,
    Id,
    Name,
    Description,
    InviteLink,
    MemberCount,
    LogoUrl,
    Verified,
    Tags,
    OwnerId,
    GuildId,
    LastBumpAt,
    BumpCount,
    AutoUpdate,
    CreatedAt,
}
