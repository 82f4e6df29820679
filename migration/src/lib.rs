pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_090000_create_job_experiences_table;
mod m20250310_090100_create_education_table;
mod m20250310_090200_create_tech_stack_table;
mod m20250310_090300_create_projects_table;
mod m20250310_090400_create_intro_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_090000_create_job_experiences_table::Migration),
            Box::new(m20250310_090100_create_education_table::Migration),
            Box::new(m20250310_090200_create_tech_stack_table::Migration),
            Box::new(m20250310_090300_create_projects_table::Migration),
            Box::new(m20250310_090400_create_intro_table::Migration),
        ]
    }
}
