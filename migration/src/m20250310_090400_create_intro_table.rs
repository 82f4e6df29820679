use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // At most one row is kept by the intro action, not by a constraint.
        manager
            .create_table(
                Table::create()
                    .table(Intro::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Intro::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Intro::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Intro::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Intro::Summary).text().not_null())
                    .col(ColumnDef::new(Intro::ProfileImageUrl).string_len(255))
                    .col(ColumnDef::new(Intro::ContactEmail).string_len(255))
                    .col(ColumnDef::new(Intro::LinkedinUrl).string_len(255))
                    .col(ColumnDef::new(Intro::GithubUrl).string_len(255))
                    .col(
                        ColumnDef::new(Intro::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Intro::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Intro::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Intro {
    Table,
    Id,
    Name,
    Title,
    Summary,
    ProfileImageUrl,
    ContactEmail,
    LinkedinUrl,
    GithubUrl,
    CreatedAt,
    UpdatedAt,
}
