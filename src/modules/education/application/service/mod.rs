pub mod education_service;

pub use education_service::EducationService;
