pub mod intro_repository;

pub use intro_repository::IntroRepository;
