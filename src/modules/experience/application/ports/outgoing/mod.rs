pub mod experience_repository;

pub use experience_repository::ExperienceRepository;
