pub mod intro_service;

pub use intro_service::IntroService;
