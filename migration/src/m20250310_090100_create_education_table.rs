use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Education::Institution)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::Degree).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Education::FieldOfStudy)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::StartDate).string_len(7).not_null())
                    .col(ColumnDef::new(Education::EndDate).string_len(7))
                    .col(ColumnDef::new(Education::Description).text())
                    .col(ColumnDef::new(Education::Grade).string_len(50))
                    .col(
                        ColumnDef::new(Education::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Education::UpdatedAt)
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
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Institution,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    Description,
    Grade,
    CreatedAt,
    UpdatedAt,
}
