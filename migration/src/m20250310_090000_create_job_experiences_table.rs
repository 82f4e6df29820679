use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create job_experiences table
        // =====================================================
        // Dates are stored as "YYYY-MM" text, the same shape the forms submit.
        manager
            .create_table(
                Table::create()
                    .table(JobExperiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobExperiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(JobExperiences::Company)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobExperiences::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobExperiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(JobExperiences::StartDate)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobExperiences::EndDate)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobExperiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobExperiences::UpdatedAt)
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
            .drop_table(Table::drop().table(JobExperiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobExperiences {
    Table,
    Id,
    Company,
    Title,
    Description,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}
