pub mod intro_repository_postgres;
pub mod sea_orm_entity;

pub use intro_repository_postgres::IntroRepositoryPostgres;
