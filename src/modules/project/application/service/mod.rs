pub mod project_service;

pub use project_service::ProjectService;
