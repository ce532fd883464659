use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(string(Application::Name))
                    .col(text(Application::Description))
                    .col(string(Application::InviteLink))
                    .col(integer(Application::MemberCount).default(0))
                    .col(string_null(Application::LogoUrl))
                    .col(string(Application::Tags).default(""))
                    .col(string(Application::RepresentativeId))
                    .col(
                        timestamp(Application::SubmittedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    Name,
    Description,
    InviteLink,
    MemberCount,
    LogoUrl,
    Tags,
    RepresentativeId,
    SubmittedAt,
}
