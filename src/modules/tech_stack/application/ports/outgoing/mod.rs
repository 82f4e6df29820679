pub mod tech_stack_repository;

pub use tech_stack_repository::TechStackRepository;
