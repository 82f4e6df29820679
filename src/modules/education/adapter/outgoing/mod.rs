pub mod education_repository_postgres;
pub mod sea_orm_entity;

pub use education_repository_postgres::EducationRepositoryPostgres;
