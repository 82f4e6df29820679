use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechStack::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechStack::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(TechStack::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(TechStack::Category)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TechStack::ProficiencyLevel)
                            .integer()
                            .not_null()
                            .check(Expr::col(TechStack::ProficiencyLevel).between(1, 10)),
                    )
                    .col(ColumnDef::new(TechStack::YearsOfExperience).integer())
                    .col(
                        ColumnDef::new(TechStack::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TechStack::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Display groups by category
        manager
            .create_index(
                Index::create()
                    .name("idx_tech_stack_category")
                    .table(TechStack::Table)
                    .col(TechStack::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tech_stack_category")
                    .table(TechStack::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TechStack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TechStack {
    Table,
    Id,
    Name,
    Category,
    ProficiencyLevel,
    YearsOfExperience,
    CreatedAt,
    UpdatedAt,
}
