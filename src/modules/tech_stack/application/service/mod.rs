pub mod tech_stack_service;

pub use tech_stack_service::TechStackService;
